use std::thread;

use crate::api::models::{
    ChurnMotifMonth, ChurnTrendPoint, Kpis, Slice, VolumeBucket, WordCloudTerm,
};
use crate::api::{ApiClient, Backend};
use crate::domain::{FilterOptions, FilterState, Period};
use crate::resource::{Loadable, Resource};

pub struct AnalyticsVm {
    pub filters: FilterState,
    pub period: Period,
    pub options: Loadable<FilterOptions>,
    pub kpis: Loadable<Kpis>,
    pub word_cloud: Loadable<Vec<WordCloudTerm>>,
    pub churn_trend: Loadable<Vec<ChurnTrendPoint>>,
    pub volume: Loadable<Vec<VolumeBucket>>,
    pub churn_motifs: Loadable<Vec<ChurnMotifMonth>>,
    pub churn_distribution: Loadable<Vec<Slice>>,
    pub automation: Loadable<Vec<Slice>>,
}

pub fn load_analytics<B: Backend>(
    client: &ApiClient<B>,
    filters: FilterState,
    period: Period,
) -> AnalyticsVm {
    let options = Resource::new("filter options");
    let kpis = Resource::new("kpis");
    let word_cloud = Resource::new("word cloud");
    let churn_trend = Resource::new("churn trend");
    let volume = Resource::new("volume");
    let churn_motifs = Resource::new("churn motifs");
    let churn_distribution = Resource::new("churn distribution");
    let automation = Resource::new("auto vs human");

    thread::scope(|s| {
        s.spawn(|| options.refresh(|| client.filter_options()));
        s.spawn(|| kpis.refresh(|| client.kpis(&filters)));
        s.spawn(|| word_cloud.refresh(|| client.word_cloud(&filters)));
        s.spawn(|| churn_trend.refresh(|| client.churn_trend(&filters)));
        s.spawn(|| volume.refresh(|| client.volume(period, &filters)));
        s.spawn(|| churn_motifs.refresh(|| client.churn_motifs_stacked(&filters)));
        s.spawn(|| churn_distribution.refresh(|| client.churn_distribution(&filters)));
        s.spawn(|| automation.refresh(|| client.auto_vs_human()));
    });

    AnalyticsVm {
        filters,
        period,
        options: options.into_state(),
        kpis: kpis.into_state(),
        word_cloud: word_cloud.into_state(),
        churn_trend: churn_trend.into_state(),
        volume: volume.into_state(),
        churn_motifs: churn_motifs.into_state(),
        churn_distribution: churn_distribution.into_state(),
        automation: automation.into_state(),
    }
}
