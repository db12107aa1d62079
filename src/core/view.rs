//! Derived timeline view.
//!
//! [`TimelineView`] owns the filter state and the filtered result. Every
//! mutation goes through [`TimelineView::apply`]; a change that alters the
//! state reruns the filter once and rebuilds the query string, a change that
//! leaves it equal does nothing.

use crate::core::filter::apply_filters;
use crate::core::query;
use crate::models::{DateRange, EventRecord, FilterState, TypeFilter};
use chrono::NaiveDate;

/// One user interaction on the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Type(TypeFilter),
    Range(DateRange),
    Search(String),
    /// Every field back to its default in a single step.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    HasResults,
    NoResults,
}

pub struct TimelineView<'a> {
    records: &'a [EventRecord],
    today: NaiveDate,
    state: FilterState,
    visible: Vec<&'a EventRecord>,
    query: String,
    recomputations: u64,
}

impl<'a> TimelineView<'a> {
    pub fn new(records: &'a [EventRecord], state: FilterState, today: NaiveDate) -> Self {
        let mut view = Self {
            records,
            today,
            state,
            visible: Vec::new(),
            query: String::new(),
            recomputations: 0,
        };
        view.recompute();
        view
    }

    /// Import a query string once, at startup.
    pub fn from_query(records: &'a [EventRecord], raw_query: &str, today: NaiveDate) -> Self {
        Self::new(records, query::decode(raw_query), today)
    }

    /// Apply a change. Returns `true` when the state actually changed.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let mut next = self.state.clone();
        match change {
            FilterChange::Type(t) => next.type_filter = t,
            FilterChange::Range(r) => next.date_range = r,
            FilterChange::Search(s) => next.search = s,
            FilterChange::Reset => next = FilterState::default(),
        }

        if next == self.state {
            return false;
        }

        self.state = next;
        self.recompute();
        true
    }

    pub fn reset(&mut self) -> bool {
        self.apply(FilterChange::Reset)
    }

    fn recompute(&mut self) {
        self.visible = apply_filters(self.records, &self.state, self.today);
        self.query = query::encode(&self.state);
        self.recomputations += 1;

        tracing::debug!(
            filter = %self.state.type_filter,
            range = %self.state.date_range,
            search = %self.state.search,
            visible = self.visible.len(),
            "timeline recomputed"
        );
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Current query string, without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[&'a EventRecord] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn view_state(&self) -> ViewState {
        if self.visible.is_empty() {
            ViewState::NoResults
        } else {
            ViewState::HasResults
        }
    }

    /// How many times the filter has run, including the initial pass.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }
}
