mod common;

use caresync::core::RecordStore;
use caresync::core::filter::{apply_filters, cutoff, matches_range};
use caresync::models::{DateRange, EventRecord, EventType, FilterState, TypeFilter};
use chrono::NaiveDate;
use common::{ids, today};

fn sample() -> RecordStore {
    RecordStore::sample()
}

fn bare(id: u32, date: &str, kind: EventType, title: &str) -> EventRecord {
    EventRecord {
        id,
        date: date.to_string(),
        kind,
        title: title.to_string(),
        description: String::new(),
        details: Vec::new(),
        status: String::new(),
        provider: String::new(),
        location: String::new(),
        trend: None,
    }
}

#[test]
fn default_state_keeps_every_record_in_order() {
    let store = sample();
    let out = apply_filters(store.records(), &FilterState::default(), today());
    assert_eq!(ids(&out), (1..=11).collect::<Vec<_>>());
}

#[test]
fn lab_filter_returns_the_three_labs() {
    let store = sample();
    let state = FilterState::new(EventType::Lab.into(), DateRange::AllTime, "");
    let out = apply_filters(store.records(), &state, today());
    assert_eq!(ids(&out), vec![1, 6, 10]);
    assert!(out.iter().all(|r| r.kind == EventType::Lab));
}

#[test]
fn search_is_case_insensitive_over_title_and_description() {
    let store = sample();

    let state = FilterState::new(TypeFilter::All, DateRange::AllTime, "cholesterol");
    assert_eq!(ids(&apply_filters(store.records(), &state, today())), vec![2, 3, 4, 5, 6]);

    let state = FilterState::new(TypeFilter::All, DateRange::AllTime, "ATORVASTATIN");
    assert_eq!(ids(&apply_filters(store.records(), &state, today())), vec![2, 4]);
}

#[test]
fn search_does_not_look_into_details() {
    let store = sample();
    // "hemoglobin" only appears as a CBC detail key
    let state = FilterState::new(TypeFilter::All, DateRange::AllTime, "hemoglobin");
    assert!(apply_filters(store.records(), &state, today()).is_empty());
}

#[test]
fn date_windows_grow_with_the_range() {
    let store = sample();
    let run = |range| {
        let state = FilterState::new(TypeFilter::All, range, "");
        ids(&apply_filters(store.records(), &state, today()))
    };

    assert_eq!(run(DateRange::Last30Days), vec![1, 2, 3]);
    assert_eq!(run(DateRange::Last90Days), vec![1, 2, 3, 4]);
    assert_eq!(run(DateRange::LastYear), (1..=9).collect::<Vec<_>>());
    assert_eq!(run(DateRange::AllTime), (1..=11).collect::<Vec<_>>());
}

#[test]
fn predicates_are_combined() {
    let store = sample();
    let state = FilterState::new(EventType::Prescription.into(), DateRange::LastYear, "");
    assert_eq!(ids(&apply_filters(store.records(), &state, today())), vec![2, 4, 7]);

    let state = FilterState::new(EventType::Visit.into(), DateRange::LastYear, "cholesterol");
    assert_eq!(ids(&apply_filters(store.records(), &state, today())), vec![3, 5]);
}

#[test]
fn diagnosis_in_last_30_days_is_empty() {
    let store = sample();
    let state = FilterState::new(EventType::Diagnosis.into(), DateRange::Last30Days, "");
    assert!(apply_filters(store.records(), &state, today()).is_empty());
}

#[test]
fn cutoff_day_itself_is_inside_the_window() {
    let cut = cutoff(DateRange::Last30Days, today()).unwrap();
    assert_eq!(cut, NaiveDate::from_ymd_opt(2023, 12, 16).unwrap());

    let on_edge = bare(1, "2023-12-16", EventType::Visit, "edge");
    let before = bare(2, "2023-12-15", EventType::Visit, "before");
    assert!(matches_range(&on_edge, DateRange::Last30Days, today()));
    assert!(!matches_range(&before, DateRange::Last30Days, today()));
}

#[test]
fn all_time_has_no_cutoff() {
    assert_eq!(cutoff(DateRange::AllTime, today()), None);
}

#[test]
fn malformed_dates_only_match_all_time() {
    let records = vec![
        bare(1, "2024-01-10", EventType::Lab, "good"),
        bare(2, "not-a-date", EventType::Lab, "bad"),
        bare(3, "2024-13-40", EventType::Lab, "impossible"),
    ];

    let all = FilterState::default();
    assert_eq!(ids(&apply_filters(&records, &all, today())), vec![1, 2, 3]);

    for range in [DateRange::Last30Days, DateRange::Last90Days, DateRange::LastYear] {
        let state = FilterState::new(TypeFilter::All, range, "");
        assert_eq!(ids(&apply_filters(&records, &state, today())), vec![1]);
    }
}

#[test]
fn future_dates_pass_bounded_ranges() {
    let records = vec![bare(1, "2024-06-01", EventType::Visit, "scheduled")];
    let state = FilterState::new(TypeFilter::All, DateRange::Last30Days, "");
    assert_eq!(ids(&apply_filters(&records, &state, today())), vec![1]);
}

#[test]
fn empty_input_gives_empty_output() {
    let state = FilterState::new(EventType::Lab.into(), DateRange::LastYear, "x");
    assert!(apply_filters(&[], &state, today()).is_empty());
}

#[test]
fn store_rejects_duplicate_ids() {
    let records = vec![
        bare(1, "2024-01-10", EventType::Lab, "a"),
        bare(1, "2024-01-11", EventType::Visit, "b"),
    ];
    assert!(RecordStore::new(records).is_err());
}

#[test]
fn sample_store_lookup() {
    let store = sample();
    assert_eq!(store.len(), 11);
    assert_eq!(store.get(6).map(|r| r.title.as_str()), Some("Lipid Panel"));
    assert_eq!(store.get(6).map(|r| r.status.as_str()), Some("Borderline High"));
    assert!(store.get(6).is_some_and(|r| r.has_trend()));
    assert!(store.get(99).is_none());
}

#[test]
fn store_rejects_trend_on_non_lab_records() {
    let mut visit = bare(3, "2024-01-08", EventType::Visit, "checkup");
    visit.trend = Some(vec![1.0, 2.0]);
    assert!(matches!(
        RecordStore::new(vec![visit]),
        Err(caresync::errors::AppError::TrendOnNonLab(3))
    ));

    let mut lab = bare(6, "2023-09-08", EventType::Lab, "lipids");
    lab.trend = Some(vec![1.0, 2.0]);
    assert!(RecordStore::new(vec![lab]).is_ok());
}
