// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::RecordExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::EventRecord;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the given (already filtered) records to `file`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        records: &[&EventRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("No records match the current filters; writing an empty export.");
        }

        let rows: Vec<RecordExport> = records.iter().map(|r| RecordExport::from(*r)).collect();

        tracing::debug!(format = format.as_str(), rows = rows.len(), "exporting timeline");

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
