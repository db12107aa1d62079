use chrono::{Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `today - days`, saturating at the earliest representable date.
pub fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today
        .checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

/// "Jan 12, 2024"; unparsable input is returned unchanged.
pub fn format_long(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Jan 12"
pub fn format_short(d: &NaiveDate) -> String {
    d.format("%b %-d").to_string()
}
