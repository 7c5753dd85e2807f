use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::models::{
    ActivityPeak, ChurnMotifMonth, ChurnTrendPoint, Kpis, MotifSentiment, Slice, TweetPage,
    VolumeBucket, WordCloudTerm,
};
use crate::api::ApiError;
use crate::domain::{
    ActivityKind, ExportSelection, FilterOptions, FilterState, PageQuery, Period, QueryParams,
};

const USER_AGENT: &str = concat!("atlas-dashboard/", env!("CARGO_PKG_VERSION"));

/// Transport used by [`ApiClient`]: a single GET returning the body of a
/// successful response.
pub trait Backend: Send + Sync {
    fn get(&self, url: &Url) -> Result<String, ApiError>;
}

/// `reqwest` transport. No timeout is set: a slow endpoint keeps its view
/// loading until the backend answers.
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Backend for HttpBackend {
    fn get(&self, url: &Url) -> Result<String, ApiError> {
        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();

        let text = resp
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

/// Query client of the analytics backend, one method per endpoint.
///
/// Every filtered request carries the operation's own parameters first,
/// followed by [`FilterState::query_params`].
pub struct ApiClient<B = HttpBackend> {
    base: Url,
    backend: B,
}

impl ApiClient<HttpBackend> {
    pub fn connect(base: Url) -> Result<Self, ApiError> {
        Self::new(base, HttpBackend::new()?)
    }
}

impl<B: Backend> ApiClient<B> {
    pub fn new(base: Url, backend: B) -> Result<Self, ApiError> {
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{base} cannot carry endpoint paths"
            )));
        }

        Ok(Self { base, backend })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        self.fetch("filters", QueryParams::new())
    }

    pub fn kpis(&self, filters: &FilterState) -> Result<Kpis, ApiError> {
        self.fetch("kpis", filters.query_params())
    }

    pub fn word_cloud(&self, filters: &FilterState) -> Result<Vec<WordCloudTerm>, ApiError> {
        self.fetch("wordcloud", filters.query_params())
    }

    pub fn volume(
        &self,
        period: Period,
        filters: &FilterState,
    ) -> Result<Vec<VolumeBucket>, ApiError> {
        let params = with_filters(vec![("period", period.as_str().to_string())], filters);
        self.fetch("volume", params)
    }

    pub fn auto_vs_human(&self) -> Result<Vec<Slice>, ApiError> {
        self.fetch("auto-vs-human", QueryParams::new())
    }

    pub fn churn_trend(&self, filters: &FilterState) -> Result<Vec<ChurnTrendPoint>, ApiError> {
        self.fetch("churn-trend", filters.query_params())
    }

    pub fn churn_motifs_stacked(
        &self,
        filters: &FilterState,
    ) -> Result<Vec<ChurnMotifMonth>, ApiError> {
        self.fetch("churn-motifs-stacked", filters.query_params())
    }

    pub fn churn_distribution(&self, filters: &FilterState) -> Result<Vec<Slice>, ApiError> {
        self.fetch("churn-distribution", filters.query_params())
    }

    pub fn motif_sentiment(&self, filters: &FilterState) -> Result<Vec<MotifSentiment>, ApiError> {
        self.fetch("motif-sentiment", filters.query_params())
    }

    pub fn sentiment_distribution(&self, filters: &FilterState) -> Result<Vec<Slice>, ApiError> {
        self.fetch("sentiment-distribution", filters.query_params())
    }

    pub fn activity_peaks(
        &self,
        kind: ActivityKind,
        filters: &FilterState,
    ) -> Result<Vec<ActivityPeak>, ApiError> {
        let params = with_filters(vec![("type", kind.as_str().to_string())], filters);
        self.fetch("activity-peaks", params)
    }

    pub fn tweets(&self, page: PageQuery, filters: &FilterState) -> Result<TweetPage, ApiError> {
        self.fetch("tweets", with_filters(page.query_params(), filters))
    }

    /// URL of the CSV export for `selection` and `filters`. Nothing is
    /// requested; the browser downloads from this URL itself.
    pub fn export_url(&self, selection: &ExportSelection, filters: &FilterState) -> Url {
        self.endpoint("export", with_filters(selection.query_params(), filters))
    }

    fn endpoint(&self, path: &str, params: QueryParams) -> Url {
        let mut url = self.base.clone();

        // `new` rejects bases without a path, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        url
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str, params: QueryParams) -> Result<T, ApiError> {
        let url = self.endpoint(path, params);
        log::debug!("GET {url}");

        let body = self.backend.get(&url)?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("/{path}: {e}")))
    }
}

fn with_filters(mut params: QueryParams, filters: &FilterState) -> QueryParams {
    params.extend(filters.query_params());
    params
}
