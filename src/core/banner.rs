//! Trust banner: shown above the timeline until the user dismisses it.

use crate::db::log::{events, track_quiet};
use crate::db::storage::{TRUST_BANNER_DISMISSED_KEY, get_flag, set_flag};
use crate::errors::AppResult;
use rusqlite::Connection;

pub struct BannerLogic;

impl BannerLogic {
    pub fn is_dismissed(conn: &Connection) -> AppResult<bool> {
        get_flag(conn, TRUST_BANNER_DISMISSED_KEY)
    }

    /// Whether the banner should be displayed. Records a view when it is.
    pub fn should_show(conn: &Connection, feature_enabled: bool) -> AppResult<bool> {
        if !feature_enabled || Self::is_dismissed(conn)? {
            return Ok(false);
        }
        track_quiet(conn, events::TRUST_BANNER_VIEWED, "", "Trust banner shown");
        Ok(true)
    }

    pub fn dismiss(conn: &Connection) -> AppResult<()> {
        set_flag(conn, TRUST_BANNER_DISMISSED_KEY, true)?;
        track_quiet(conn, events::TRUST_BANNER_DISMISSED, "", "Trust banner dismissed");
        Ok(())
    }

    pub fn reset(conn: &Connection) -> AppResult<()> {
        set_flag(conn, TRUST_BANNER_DISMISSED_KEY, false)?;
        track_quiet(conn, events::TRUST_BANNER_RESET, "", "Trust banner restored");
        Ok(())
    }
}
