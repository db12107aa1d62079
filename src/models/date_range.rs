use serde::{Deserialize, Serialize};

/// Relative date window applied to the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "1y")]
    LastYear,
    #[default]
    #[serde(rename = "all")]
    AllTime,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::Last30Days,
        DateRange::Last90Days,
        DateRange::LastYear,
        DateRange::AllTime,
    ];

    /// Window length in days, `None` for all time.
    pub fn days(&self) -> Option<u64> {
        match self {
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
            DateRange::LastYear => Some(365),
            DateRange::AllTime => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Last30Days => "30d",
            DateRange::Last90Days => "90d",
            DateRange::LastYear => "1y",
            DateRange::AllTime => "all",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "30d" => Some(DateRange::Last30Days),
            "90d" => Some(DateRange::Last90Days),
            "1y" => Some(DateRange::LastYear),
            "all" => Some(DateRange::AllTime),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last30Days => "Last 30 days",
            DateRange::Last90Days => "Last 90 days",
            DateRange::LastYear => "Last year",
            DateRange::AllTime => "All time",
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// clap parses the wire form so `--range 30d` matches the query string value.
impl clap::ValueEnum for DateRange {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()).help(self.label()))
    }
}
