//! Timeline event filter.
//!
//! Three independent predicates combined with AND:
//! - type: the selector is "all" or equals the record type
//! - text: empty search, or case-insensitive substring of title or description
//! - date: "all time", or the record date is on/after `today - N days`
//!
//! The output keeps the input order. A record whose date does not parse never
//! satisfies a bounded range and always satisfies "all time".

use crate::models::{DateRange, EventRecord, FilterState, TypeFilter};
use crate::utils::date::days_before;
use chrono::NaiveDate;

pub fn matches_type(record: &EventRecord, filter: TypeFilter) -> bool {
    filter.matches(record.kind)
}

pub fn matches_search(record: &EventRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

/// First day inside the window, `None` for all time.
pub fn cutoff(range: DateRange, today: NaiveDate) -> Option<NaiveDate> {
    range.days().map(|days| days_before(today, days))
}

/// Date predicate against an already computed cutoff.
pub fn matches_cutoff(record: &EventRecord, cut: Option<NaiveDate>) -> bool {
    match cut {
        None => true,
        Some(cut) => record.calendar_date().is_some_and(|d| d >= cut),
    }
}

pub fn matches_range(record: &EventRecord, range: DateRange, today: NaiveDate) -> bool {
    matches_cutoff(record, cutoff(range, today))
}

pub fn matches(record: &EventRecord, state: &FilterState, today: NaiveDate) -> bool {
    matches_type(record, state.type_filter)
        && matches_search(record, &state.search)
        && matches_range(record, state.date_range, today)
}

/// Ordered subsequence of `records` satisfying every active predicate.
pub fn apply_filters<'a>(
    records: &'a [EventRecord],
    state: &FilterState,
    today: NaiveDate,
) -> Vec<&'a EventRecord> {
    let cut = cutoff(state.date_range, today);

    records
        .iter()
        .filter(|r| {
            matches_type(r, state.type_filter)
                && matches_search(r, &state.search)
                && matches_cutoff(r, cut)
        })
        .collect()
}
