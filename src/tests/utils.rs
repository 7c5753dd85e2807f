use std::collections::HashMap;
use std::io::Read;
use std::sync::Mutex;

use astra::{Body, Request, Response};
use http::Method;
use url::Url;

use crate::api::{ApiClient, ApiError, Backend};
use crate::errors::{ResultResp, ServerError};

pub const BASE: &str = "http://backend.test/api";

/// In-memory backend: canned bodies per endpoint, and a log of every URL
/// asked for. Endpoints without a canned answer fail with a 500.
#[derive(Default)]
pub struct StubBackend {
    answers: HashMap<String, Result<String, u16>>,
    requests: Mutex<Vec<Url>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: &str, body: &str) -> Self {
        self.answers.insert(endpoint.to_string(), Ok(body.to_string()));
        self
    }

    pub fn failing(mut self, endpoint: &str, status: u16) -> Self {
        self.answers.insert(endpoint.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests sent to one endpoint, in order.
    pub fn requests_to(&self, endpoint: &str) -> Vec<Url> {
        self.requests()
            .into_iter()
            .filter(|url| endpoint_of(url) == endpoint)
            .collect()
    }
}

impl Backend for StubBackend {
    fn get(&self, url: &Url) -> Result<String, ApiError> {
        self.requests.lock().unwrap().push(url.clone());

        match self.answers.get(&endpoint_of(url)) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ApiError::Status {
                status: *status,
                body: "stub failure".to_string(),
            }),
            None => Err(ApiError::Status {
                status: 500,
                body: "no stubbed answer".to_string(),
            }),
        }
    }
}

fn endpoint_of(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string()
}

pub fn stub_client(backend: StubBackend) -> ApiClient<StubBackend> {
    ApiClient::new(Url::parse(BASE).unwrap(), backend).unwrap()
}

/// A backend that answers every dashboard endpoint with an empty but
/// well-formed payload.
pub fn empty_backend() -> StubBackend {
    StubBackend::new()
        .with("filters", r#"{"min_date":null,"max_date":null,"motifs":[],"churn_risks":[]}"#)
        .with("kpis", r#"{"total_tweets":0}"#)
        .with("wordcloud", "[]")
        .with("volume", "[]")
        .with("auto-vs-human", "[]")
        .with("churn-trend", "[]")
        .with("churn-motifs-stacked", "[]")
        .with("churn-distribution", "[]")
        .with("motif-sentiment", "[]")
        .with("sentiment-distribution", "[]")
        .with("activity-peaks", "[]")
        .with("tweets", r#"{"total":0,"page":1,"limit":15,"data":[]}"#)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Decoded query pairs of a URL, in order.
pub fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn owned(params: &[(&str, &str)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Route error of a request expected to fail.
pub fn expect_error(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got HTTP {}", resp.status()),
        Err(err) => err,
    }
}
