/// Bucket size of the volume histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "Par jour",
            Period::Week => "Par semaine",
            Period::Month => "Par mois",
            Period::Year => "Par année",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Bucket size of the activity peaks view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityKind {
    #[default]
    Hourly,
    Daily,
    Weekly,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Hourly,
        ActivityKind::Daily,
        ActivityKind::Weekly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Hourly => "hourly",
            ActivityKind::Daily => "daily",
            ActivityKind::Weekly => "weekly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Hourly => "Par heure",
            ActivityKind::Daily => "Par jour",
            ActivityKind::Weekly => "Par semaine",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}
