use super::event_type::EventType;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One labelled value in a record's detail block, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub key: String,
    pub value: String,
}

impl Detail {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// One entry of the patient's health history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u32,
    /// ISO date (`YYYY-MM-DD`), kept as text so a malformed value survives loading.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<Detail>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub location: String,
    /// Historical readings for a lab test, oldest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<f64>>,
}

impl EventRecord {
    /// Parsed calendar date, `None` when the stored text is not `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn has_trend(&self) -> bool {
        self.trend.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.value.as_str())
    }
}
