use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    Low,
    Normal,
    High,
}

impl TrendStatus {
    /// Above `high` is high, below `low` is low, bounds themselves are normal.
    pub fn classify(value: f64, low: f64, high: f64) -> Self {
        if value > high {
            TrendStatus::High
        } else if value < low {
            TrendStatus::Low
        } else {
            TrendStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendStatus::Low => "Low",
            TrendStatus::Normal => "Normal",
            TrendStatus::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: Option<NaiveDate>,
    pub value: f64,
    pub status: TrendStatus,
}

/// Everything the lab detail view needs for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabTrend {
    pub record_id: u32,
    pub title: String,
    pub unit: String,
    pub low: f64,
    pub high: f64,
    pub points: Vec<TrendPoint>,
}

impl LabTrend {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Up to `n` most recent points, newest first.
    pub fn latest(&self, n: usize) -> Vec<&TrendPoint> {
        self.points.iter().rev().take(n).collect()
    }
}
