pub mod analytics;
pub mod data;
pub mod sentiment;

pub use analytics::analytics_page;
pub use data::data_page;
pub use sentiment::sentiment_page;
