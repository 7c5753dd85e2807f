use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer};

use crate::resource::EmptyResult;

// /kpis
//  ├── total_tweets
//  ├── negatifs / positifs / neutres (+ _pct)
//  ├── urgents / churn (+ _pct)
//  └── worst_day, worst_day_count

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Kpis {
    pub total_tweets: u64,
    pub negatifs: u64,
    pub negatifs_pct: f64,
    pub positifs: u64,
    pub positifs_pct: f64,
    pub neutres: u64,
    pub neutres_pct: f64,
    pub urgents: u64,
    pub urgents_pct: f64,
    pub churn: u64,
    pub churn_pct: f64,
    pub worst_day: String,
    pub worst_day_count: u64,
}

impl EmptyResult for Kpis {
    fn is_empty_result(&self) -> bool {
        self.total_tweets == 0
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordCloudTerm {
    pub text: String,
    pub size: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VolumeBucket {
    pub label: String,
    pub volume: u64,
}

/// One part of a share chart (automation split, churn causes, sentiment mix).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub color: String,
}

/// Either series may be missing: projected months have no `actual`,
/// observed months have no `predicted`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChurnTrendPoint {
    pub month: String,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
}

/// Churners per motif for one month. Motif keys are whatever labels the
/// backend currently knows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChurnMotifMonth {
    pub month: String,
    #[serde(flatten)]
    pub motifs: BTreeMap<String, f64>,
}

impl ChurnMotifMonth {
    /// Every motif label present in at least one month.
    pub fn motif_labels(months: &[ChurnMotifMonth]) -> Vec<String> {
        months
            .iter()
            .flat_map(|m| m.motifs.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn count(&self, motif: &str) -> f64 {
        self.motifs.get(motif).copied().unwrap_or(0.0)
    }
}

/// Sentiment shares (percent) for one motif.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotifSentiment {
    pub motif: String,
    pub positif: f64,
    pub neutre: f64,
    pub negatif: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityPeak {
    /// Hour (`time`), day (`day`) or week (`week`) label, depending on the request.
    #[serde(alias = "time", alias = "day", alias = "week")]
    pub bucket: String,
    pub volume: u64,
    pub negative: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tweet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub motif: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_norm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_urgent: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub churn_risk: String,
    #[serde(default)]
    pub text_translated_fr: Option<String>,
    #[serde(default)]
    pub text_clean: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub emojis: Option<String>,
}

/// Envelope of the `/tweets` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TweetPage {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub data: Vec<Tweet>,
}

impl EmptyResult for TweetPage {
    fn is_empty_result(&self) -> bool {
        self.data.is_empty()
    }
}

// Records come from a dataframe dump where missing cells are `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
