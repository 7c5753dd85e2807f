//! CSV export column selection. Over HTTP a selection is rebuilt from the
//! export form's checkboxes ([`ExportSelection::from_query`]);
//! [`ExportSelection::toggle`] is the in-process equivalent of ticking one.

use url::form_urlencoded;

use crate::domain::filters::QueryParams;

/// Columns the backend can put in a CSV export, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportColumn {
    Date,
    FullText,
    TextClean,
    TextTranslated,
    Motif,
    Sentiment,
    Urgent,
    ChurnRisk,
    Lang,
    Emojis,
}

impl ExportColumn {
    pub const ALL: [ExportColumn; 10] = [
        ExportColumn::Date,
        ExportColumn::FullText,
        ExportColumn::TextClean,
        ExportColumn::TextTranslated,
        ExportColumn::Motif,
        ExportColumn::Sentiment,
        ExportColumn::Urgent,
        ExportColumn::ChurnRisk,
        ExportColumn::Lang,
        ExportColumn::Emojis,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExportColumn::Date => "date",
            ExportColumn::FullText => "full_text",
            ExportColumn::TextClean => "text_clean",
            ExportColumn::TextTranslated => "text_translated_fr",
            ExportColumn::Motif => "motif",
            ExportColumn::Sentiment => "sentiment_norm",
            ExportColumn::Urgent => "is_urgent",
            ExportColumn::ChurnRisk => "churn_risk",
            ExportColumn::Lang => "lang",
            ExportColumn::Emojis => "emojis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportColumn::Date => "Date",
            ExportColumn::FullText => "Message original",
            ExportColumn::TextClean => "Message nettoyé",
            ExportColumn::TextTranslated => "Message traduit",
            ExportColumn::Motif => "Motif",
            ExportColumn::Sentiment => "Sentiment",
            ExportColumn::Urgent => "Urgent",
            ExportColumn::ChurnRisk => "Risque Churn",
            ExportColumn::Lang => "Langue",
            ExportColumn::Emojis => "Emojis",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// Ordered, duplicate-free set of columns chosen for an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSelection {
    columns: Vec<ExportColumn>,
}

impl Default for ExportSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ExportSelection {
    pub fn all() -> Self {
        Self {
            columns: ExportColumn::ALL.to_vec(),
        }
    }

    pub fn none() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Builds a selection from column ids, keeping the first occurrence of
    /// each known id. Unknown ids are dropped.
    pub fn from_ids<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selection = Self::none();

        for id in ids {
            match ExportColumn::from_id(id.trim()) {
                Some(column) if !selection.contains(column) => selection.columns.push(column),
                Some(_) => {}
                None => log::warn!("Ignoring unknown export column {id:?}"),
            }
        }

        selection
    }

    /// Reads every `columns` parameter, each either a single id (one per
    /// checkbox) or a comma-joined list.
    pub fn from_query(query: &str) -> Self {
        let values: Vec<String> = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == "columns")
            .map(|(_, value)| value.into_owned())
            .collect();

        Self::from_ids(
            values
                .iter()
                .flat_map(|value| value.split(','))
                .filter(|id| !id.is_empty()),
        )
    }

    pub fn columns(&self) -> &[ExportColumn] {
        &self.columns
    }

    pub fn contains(&self, column: ExportColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn toggle(&mut self, column: ExportColumn) {
        if self.contains(column) {
            self.columns.retain(|c| *c != column);
        } else {
            self.columns.push(column);
        }
    }

    /// `columns=a,b,...`, or nothing at all for an empty selection so the
    /// backend applies its own default set.
    pub fn query_params(&self) -> QueryParams {
        if self.columns.is_empty() {
            return QueryParams::new();
        }

        let ids: Vec<&str> = self.columns.iter().map(|c| c.id()).collect();
        vec![("columns", ids.join(","))]
    }
}
