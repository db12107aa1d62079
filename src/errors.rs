//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that the CLI
//! can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Records
    // ---------------------------
    #[error("Failed to load records from {path}: {source}")]
    Records {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate record id: {0}")]
    DuplicateRecordId(u32),

    #[error("No record with id {0}")]
    RecordNotFound(u32),

    #[error("Record {0} has no trend data")]
    NoTrendData(u32),

    #[error("Record {0} has trend data but is not a lab result")]
    TrendOnNonLab(u32),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
