use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use url::form_urlencoded;

/// Value the filter controls send for "no constraint".
pub const ALL: &str = "(Tous)";

/// Ordered query parameters, appended to a URL as-is.
pub type QueryParams = Vec<(&'static str, String)>;

/// Active filter selections shared by every view of a page.
///
/// Edits go through the builder methods, which return a new state. A field
/// that is `None`, empty, or equal to [`ALL`] does not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub motif: Option<String>,
    pub sentiment: Option<String>,
    pub churn: Option<String>,
    pub urgent: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn motif(mut self, motif: impl Into<String>) -> Self {
        self.motif = Some(motif.into());
        self
    }

    pub fn sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    pub fn churn(mut self, churn: impl Into<String>) -> Self {
        self.churn = Some(churn.into());
        self
    }

    pub fn urgent(mut self, urgent: bool) -> Self {
        self.urgent = urgent;
        self
    }

    /// Query parameters understood by every filtered backend endpoint.
    ///
    /// Only constraining fields are emitted, always in the order
    /// `startDate`, `endDate`, `motif`, `sentiment`, `urgent`, `churn`.
    /// Dates are forwarded verbatim; the backend decides what an inverted
    /// or malformed range means.
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        push_constraint(&mut params, "startDate", &self.start_date);
        push_constraint(&mut params, "endDate", &self.end_date);
        push_constraint(&mut params, "motif", &self.motif);
        push_constraint(&mut params, "sentiment", &self.sentiment);
        if self.urgent {
            params.push(("urgent", "true".to_string()));
        }
        push_constraint(&mut params, "churn", &self.churn);

        params
    }

    /// Decodes the filter fields of a page query string, ignoring anything else.
    pub fn from_query(query: &str) -> Self {
        let mut filters = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = (!value.is_empty()).then(|| value.to_string());
            match key.as_ref() {
                "startDate" => filters.start_date = value,
                "endDate" => filters.end_date = value,
                "motif" => filters.motif = value,
                "sentiment" => filters.sentiment = value,
                "churn" => filters.churn = value,
                "urgent" => {
                    filters.urgent = matches!(value.as_deref(), Some("true" | "on" | "1"))
                }
                _ => {}
            }
        }

        filters
    }

    pub fn is_unconstrained(&self) -> bool {
        self.query_params().is_empty()
    }
}

fn push_constraint(params: &mut QueryParams, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() && value != ALL {
            params.push((name, value.clone()));
        }
    }
}

/// Normalized tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positif",
            Sentiment::Neutral => "Neutre",
            Sentiment::Negative => "Négatif",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Values the backend advertises for the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterOptions {
    #[serde(default, deserialize_with = "lenient_date")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub max_date: Option<NaiveDate>,
    #[serde(default)]
    pub motifs: Vec<String>,
    #[serde(default)]
    pub churn_risks: Vec<String>,
}

// The backend may serialize its date bounds as plain dates or as timestamps.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.and_then(|s| {
        let day = s.split(['T', ' ']).next().unwrap_or_default();
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }))
}
