use std::thread;

use crate::api::models::{ActivityPeak, MotifSentiment, Slice};
use crate::api::{ApiClient, Backend};
use crate::domain::{ActivityKind, FilterOptions, FilterState};
use crate::resource::{Loadable, Resource};

pub struct SentimentVm {
    pub filters: FilterState,
    pub options: Loadable<FilterOptions>,
    pub motif_sentiment: Loadable<Vec<MotifSentiment>>,
    pub distribution: Loadable<Vec<Slice>>,
    /// One entry per [`ActivityKind`], in display order.
    pub peaks: Vec<(ActivityKind, Loadable<Vec<ActivityPeak>>)>,
}

pub fn load_sentiment<B: Backend>(client: &ApiClient<B>, filters: FilterState) -> SentimentVm {
    let options = Resource::new("filter options");
    let motif_sentiment = Resource::new("motif sentiment");
    let distribution = Resource::new("sentiment distribution");
    let peaks: Vec<(ActivityKind, Resource<Vec<ActivityPeak>>)> = ActivityKind::ALL
        .into_iter()
        .map(|kind| (kind, Resource::new("activity peaks")))
        .collect();

    thread::scope(|s| {
        s.spawn(|| options.refresh(|| client.filter_options()));
        s.spawn(|| motif_sentiment.refresh(|| client.motif_sentiment(&filters)));
        s.spawn(|| distribution.refresh(|| client.sentiment_distribution(&filters)));
        for (kind, resource) in &peaks {
            let filters = &filters;
            s.spawn(move || resource.refresh(|| client.activity_peaks(*kind, filters)));
        }
    });

    SentimentVm {
        filters,
        options: options.into_state(),
        motif_sentiment: motif_sentiment.into_state(),
        distribution: distribution.into_state(),
        peaks: peaks
            .into_iter()
            .map(|(kind, resource)| (kind, resource.into_state()))
            .collect(),
    }
}
