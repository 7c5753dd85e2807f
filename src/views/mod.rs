//! View models: every view of a page fetches through its own [`Resource`]
//! on its own thread, and settles independently of the others.

mod analytics;
mod explorer;
mod sentiment;

pub use analytics::{load_analytics, AnalyticsVm};
pub use explorer::{load_explorer, load_tweets, ExplorerVm};
pub use sentiment::{load_sentiment, SentimentVm};

use crate::api::ApiError;
use crate::resource::{Loadable, Resource};

/// Fetches a single view, as the fragment routes do.
pub fn load_one<T, F>(name: &'static str, fetch: F) -> Loadable<T>
where
    F: FnOnce() -> Result<T, ApiError>,
{
    let resource = Resource::new(name);
    resource.refresh(fetch);
    resource.into_state()
}
