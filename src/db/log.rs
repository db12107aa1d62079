use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Usage events recorded by the CLI.
pub mod events {
    pub const TIMELINE_VIEWED: &str = "timeline_viewed";
    pub const FILTERS_CLEARED: &str = "filters_cleared";
    pub const LAB_TREND_OPENED: &str = "lab_trend_opened";
    pub const TIMELINE_EXPORTED: &str = "timeline_exported";
    pub const TRUST_BANNER_VIEWED: &str = "trust_banner_viewed";
    pub const TRUST_BANNER_DISMISSED: &str = "trust_banner_dismissed";
    pub const TRUST_BANNER_RESET: &str = "trust_banner_reset";
    pub const INIT: &str = "init";
}

/// Write a row into the internal `log` table.
pub fn track(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`track`], but a failure only produces a warning.
pub fn track_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = track(conn, operation, target, message) {
        tracing::warn!(operation, error = %e, "failed to write internal log");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}
