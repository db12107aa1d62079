//! Event record store: the immutable, ordered list every view filters.

use crate::errors::{AppError, AppResult};
use crate::models::{Detail, EventRecord, EventType};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<EventRecord>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate ids and trends outside lab results.
    pub fn new(records: Vec<EventRecord>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id) {
                return Err(AppError::DuplicateRecordId(r.id));
            }
            if r.trend.is_some() && r.kind != EventType::Lab {
                return Err(AppError::TrendOnNonLab(r.id));
            }
        }
        Ok(Self { records })
    }

    /// Load a JSON array of records.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let records: Vec<EventRecord> =
            serde_json::from_str(&content).map_err(|source| AppError::Records {
                path: path.display().to_string(),
                source,
            })?;
        tracing::debug!(count = records.len(), path = %path.display(), "loaded records file");
        Self::new(records)
    }

    /// Built-in patient history, newest first.
    pub fn sample() -> Self {
        Self {
            records: sample_records(),
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&EventRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    date: &str,
    kind: EventType,
    title: &str,
    description: &str,
    details: &[(&str, &str)],
    provider: &str,
    location: &str,
) -> EventRecord {
    // status is written as a detail entry below and lifted into its own field
    let status = details
        .iter()
        .find(|(k, _)| *k == "status")
        .map(|(_, v)| v.to_string())
        .unwrap_or_default();

    EventRecord {
        id,
        date: date.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        details: details
            .iter()
            .filter(|(k, _)| *k != "status")
            .map(|(k, v)| Detail::new(k, v))
            .collect(),
        status,
        provider: provider.to_string(),
        location: location.to_string(),
        trend: None,
    }
}

fn sample_records() -> Vec<EventRecord> {
    use EventType::*;

    let mut lipid = record(
        6,
        "2023-09-08",
        Lab,
        "Lipid Panel",
        "Cholesterol and triglyceride testing",
        &[
            ("totalCholesterol", "215 mg/dL"),
            ("ldl", "145 mg/dL"),
            ("hdl", "45 mg/dL"),
            ("triglycerides", "180 mg/dL"),
            ("status", "Borderline High"),
        ],
        "Epic MyChart",
        "City General Hospital",
    );
    lipid.trend = Some(vec![188.0, 196.0, 204.0, 209.0, 221.0, 215.0]);

    vec![
        record(
            1,
            "2024-01-12",
            Lab,
            "CBC Panel",
            "Complete Blood Count Panel",
            &[
                ("wbc", "6.2 K/µL"),
                ("hemoglobin", "13.4 g/dL"),
                ("platelets", "245 K/µL"),
                ("status", "Normal"),
            ],
            "Epic MyChart",
            "City General Hospital",
        ),
        record(
            2,
            "2024-01-10",
            Prescription,
            "Atorvastatin Refill",
            "10mg daily for high cholesterol",
            &[
                ("dosage", "10mg"),
                ("frequency", "Daily"),
                ("refills", "3 remaining"),
                ("status", "Active"),
            ],
            "Dr. Patel",
            "Primary Care Clinic",
        ),
        record(
            3,
            "2024-01-08",
            Visit,
            "Primary Care Visit",
            "Annual checkup and cholesterol follow-up",
            &[
                ("reason", "Annual physical"),
                ("findings", "All normal, cholesterol improved"),
                ("nextVisit", "6 months"),
                ("status", "Completed"),
            ],
            "Dr. Patel",
            "Primary Care Clinic",
        ),
        record(
            4,
            "2023-11-20",
            Prescription,
            "Atorvastatin Started",
            "10mg daily for high cholesterol",
            &[
                ("dosage", "10mg"),
                ("frequency", "Daily"),
                ("reason", "High cholesterol diagnosis"),
                ("status", "Active"),
            ],
            "Dr. Patel",
            "Primary Care Clinic",
        ),
        record(
            5,
            "2023-09-10",
            Visit,
            "Cholesterol Follow-up",
            "Follow-up visit for high cholesterol",
            &[
                ("reason", "Cholesterol follow-up"),
                ("findings", "Cholesterol still elevated, starting medication"),
                ("nextVisit", "3 months"),
                ("status", "Completed"),
            ],
            "Dr. Patel",
            "Primary Care Clinic",
        ),
        lipid,
        record(
            7,
            "2023-07-05",
            Prescription,
            "Amoxicillin",
            "500mg, 3x daily for 10 days",
            &[
                ("dosage", "500mg"),
                ("frequency", "3x daily"),
                ("duration", "10 days"),
                ("reason", "Sinus infection"),
                ("status", "Completed"),
            ],
            "Dr. Smith",
            "Urgent Care",
        ),
        record(
            8,
            "2023-07-05",
            Visit,
            "Urgent Care Visit",
            "Sinus infection diagnosis",
            &[
                ("reason", "Sinus pain and congestion"),
                ("findings", "Acute sinusitis"),
                ("treatment", "Antibiotics prescribed"),
                ("status", "Completed"),
            ],
            "Dr. Smith",
            "Urgent Care",
        ),
        record(
            9,
            "2023-03-15",
            Diagnosis,
            "Seasonal Allergies",
            "Diagnosis of seasonal allergies",
            &[
                ("symptoms", "Sneezing, runny nose, itchy eyes"),
                ("triggers", "Pollen, dust"),
                ("treatment", "Over-the-counter antihistamines"),
                ("status", "Chronic"),
            ],
            "Dr. Patel",
            "Primary Care Clinic",
        ),
        record(
            10,
            "2022-09-06",
            Lab,
            "Comprehensive Metabolic Panel",
            "Kidney, liver and electrolyte screening",
            &[
                ("glucose", "94 mg/dL"),
                ("creatinine", "0.8 mg/dL"),
                ("sodium", "139 mmol/L"),
                ("status", "Normal"),
            ],
            "Epic MyChart",
            "City General Hospital",
        ),
        record(
            11,
            "2021-01-12",
            Visit,
            "Annual Physical",
            "Routine annual physical examination",
            &[
                ("reason", "Annual physical"),
                ("findings", "All normal"),
                ("nextVisit", "1 year"),
                ("status", "Completed"),
            ],
            "Dr. Patel",
            "Primary Care Clinic",
        ),
    ]
}
