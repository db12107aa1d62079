// src/export/model.rs

use crate::models::EventRecord;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub id: u32,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub provider: String,
    pub location: String,
    /// `key: value` pairs joined with "; ".
    pub details: String,
}

impl From<&EventRecord> for RecordExport {
    fn from(r: &EventRecord) -> Self {
        Self {
            id: r.id,
            date: r.date.clone(),
            kind: r.kind.as_str().to_string(),
            title: r.title.clone(),
            description: r.description.clone(),
            status: r.status.clone(),
            provider: r.provider.clone(),
            location: r.location.clone(),
            details: r
                .details
                .iter()
                .map(|d| format!("{}: {}", d.key, d.value))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
