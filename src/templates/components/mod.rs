pub mod analytics_views;
pub mod card;
pub mod error;
pub mod explorer;
pub mod filter_bar;
pub mod links;
pub mod placeholder;
pub mod sentiment_views;

pub use card::card;
pub use error::error_page;
pub use filter_bar::filter_bar;
