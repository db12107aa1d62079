pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::RecordStore;
use crate::core::trend::TrendScale;
use crate::core::query;
use crate::models::FilterState;
use chrono::NaiveDate;
use parser::FilterArgs;

/// Everything a command handler needs, resolved once per run.
pub struct Context {
    pub cfg: Config,
    pub store: RecordStore,
    pub today: NaiveDate,
}

impl Context {
    pub fn separator(&self) -> char {
        self.cfg.separator_char.chars().next().unwrap_or('-')
    }

    pub fn trend_scale(&self) -> TrendScale {
        TrendScale {
            unit: self.cfg.trend_unit.clone(),
            low: self.cfg.trend_low,
            high: self.cfg.trend_high,
        }
    }
}

impl FilterArgs {
    /// Imported query string first, explicit flags on top.
    pub fn initial_state(&self) -> FilterState {
        let mut state = self
            .query
            .as_deref()
            .map(query::decode)
            .unwrap_or_default();

        if let Some(t) = self.filter {
            state.type_filter = t;
        }
        if let Some(r) = self.range {
            state.date_range = r;
        }
        if let Some(s) = &self.search {
            state.search = s.clone();
        }
        state
    }
}
