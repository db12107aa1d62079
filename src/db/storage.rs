//! Small key/value table for local flags.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

/// Key of the trust-banner dismissal flag.
pub const TRUST_BANNER_DISMISSED_KEY: &str = "cs_trust_banner_dismissed_v1";

pub fn get_item(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn remove_item(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM storage WHERE key = ?1", params![key])?;
    Ok(())
}

/// A flag is set only when stored as the literal "true".
pub fn get_flag(conn: &Connection, key: &str) -> AppResult<bool> {
    Ok(get_item(conn, key)?.as_deref() == Some("true"))
}

pub fn set_flag(conn: &Connection, key: &str, value: bool) -> AppResult<()> {
    if value {
        set_item(conn, key, "true")
    } else {
        remove_item(conn, key)
    }
}
