use caresync::core::query::{decode, encode, percent_decode, percent_encode, share_url};
use caresync::models::{DateRange, EventType, FilterState, TypeFilter};

fn state(t: TypeFilter, r: DateRange, s: &str) -> FilterState {
    FilterState::new(t, r, s)
}

#[test]
fn default_state_encodes_to_nothing() {
    assert_eq!(encode(&FilterState::default()), "");
}

#[test]
fn only_non_default_fields_are_written_in_fixed_order() {
    assert_eq!(
        encode(&state(EventType::Lab.into(), DateRange::AllTime, "")),
        "filter=lab"
    );
    assert_eq!(
        encode(&state(TypeFilter::All, DateRange::LastYear, "")),
        "range=1y"
    );
    assert_eq!(
        encode(&state(EventType::Diagnosis.into(), DateRange::Last30Days, "flu shot")),
        "filter=diagnosis&range=30d&search=flu%20shot"
    );
}

#[test]
fn reserved_characters_in_search_are_escaped() {
    let q = encode(&state(TypeFilter::All, DateRange::AllTime, "a&b=c+d?"));
    assert_eq!(q, "search=a%26b%3Dc%2Bd%3F");
    assert_eq!(decode(&q).search, "a&b=c+d?");
}

#[test]
fn decode_reads_every_key() {
    let s = decode("filter=lab&range=1y&search=cholesterol");
    assert_eq!(s, state(EventType::Lab.into(), DateRange::LastYear, "cholesterol"));
}

#[test]
fn decode_accepts_leading_question_mark_and_any_key_order() {
    let s = decode("?search=x&range=90d&filter=visit");
    assert_eq!(s, state(EventType::Visit.into(), DateRange::Last90Days, "x"));
}

#[test]
fn missing_keys_mean_defaults() {
    assert_eq!(decode(""), FilterState::default());
    assert_eq!(decode("?"), FilterState::default());
    assert_eq!(decode("range=30d").type_filter, TypeFilter::All);
}

#[test]
fn unknown_keys_and_values_are_ignored() {
    let s = decode("foo=bar&filter=surgery&range=2w&search=ok");
    assert_eq!(s, state(TypeFilter::All, DateRange::AllTime, "ok"));
}

#[test]
fn values_are_case_sensitive() {
    assert_eq!(decode("filter=Lab").type_filter, TypeFilter::All);
    assert_eq!(decode("range=1Y").date_range, DateRange::AllTime);
}

#[test]
fn explicit_all_is_accepted() {
    let s = decode("filter=all&range=all");
    assert!(s.is_default());
}

#[test]
fn first_occurrence_of_a_key_wins() {
    let s = decode("filter=lab&filter=visit&search=a&search=b");
    assert_eq!(s.type_filter, TypeFilter::Only(EventType::Lab));
    assert_eq!(s.search, "a");
}

#[test]
fn plus_decodes_to_space() {
    assert_eq!(decode("search=blood+test").search, "blood test");
}

#[test]
fn broken_escapes_are_kept_literally() {
    assert_eq!(percent_decode("100%"), "100%");
    assert_eq!(percent_decode("%zz1"), "%zz1");
    assert_eq!(percent_decode("a%2"), "a%2");
    assert_eq!(percent_decode("%41"), "A");
}

#[test]
fn invalid_utf8_is_replaced() {
    assert_eq!(percent_decode("%FF"), "\u{FFFD}");
}

#[test]
fn non_ascii_search_survives() {
    let q = encode(&state(TypeFilter::All, DateRange::AllTime, "µL"));
    assert_eq!(q, "search=%C2%B5L");
    assert_eq!(decode(&q).search, "µL");
}

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(percent_encode("AZaz09-_.~"), "AZaz09-_.~");
}

#[test]
fn share_url_appends_the_query() {
    let base = "https://caresync.health/timeline";
    assert_eq!(share_url(base, &FilterState::default()), base);
    assert_eq!(
        share_url(base, &state(EventType::Lab.into(), DateRange::LastYear, "")),
        "https://caresync.health/timeline?filter=lab&range=1y"
    );
}
