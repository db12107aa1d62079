//! Terminal rendering of timeline views and the lab trend drawer.

use crate::core::trend::sparkline_text;
use crate::core::view::{TimelineView, ViewState};
use crate::models::{EventRecord, LabTrend};
use crate::ui::messages::{header, hint};
use crate::utils::colors::{colorize_optional, paint_type, status_colour};
use crate::utils::date::{format_long, format_short};
use crate::utils::formatting::{bold, format_value, humanize_key, pad_right, truncate};
use crate::utils::table::{Column, Table};

const WRAP_WIDTH: usize = 72;

pub const NO_RESULTS: &str = "No events found matching your criteria.";
pub const CLEAR_HINT: &str = "Clear the filters with --clear (or `clear` in browse mode).";

/// Compact one-row-per-event listing.
pub fn timeline_table(records: &[&EventRecord], separator: char) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("DATE", 12),
        Column::new("TYPE", 12),
        Column::new("TITLE", 30),
        Column::new("STATUS", 16),
    ])
    .with_separator(separator);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            format_long(&r.date),
            paint_type(r.kind),
            truncate(&r.title, 30),
            colorize_optional(&r.status),
        ]);
    }

    table.render()
}

/// Full card for one event: description, details, provider and location.
pub fn record_card(r: &EventRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}  {}\n",
        bold(&r.title),
        paint_type(r.kind),
        format_long(&r.date)
    ));

    for line in textwrap::wrap(&r.description, WRAP_WIDTH) {
        out.push_str(&format!("  {line}\n"));
    }

    let key_w = r
        .details
        .iter()
        .map(|d| humanize_key(&d.key).len() + 1)
        .max()
        .unwrap_or(0);

    for d in &r.details {
        let label = format!("{}:", humanize_key(&d.key));
        out.push_str(&format!("    {} {}\n", pad_right(&label, key_w), d.value));
    }
    if !r.status.is_empty() {
        out.push_str(&format!("    {} {}\n", pad_right("Status:", key_w), r.status));
    }

    out.push_str(&format!(
        "  Provider: {}   Location: {}\n",
        colorize_optional(&r.provider),
        colorize_optional(&r.location)
    ));

    if r.has_trend() {
        out.push_str(&format!("  Trend available: caresync trend {}\n", r.id));
    }

    out
}

/// Print the whole view, including the empty-state fallback.
pub fn print_view(view: &TimelineView<'_>, details: bool, separator: char) {
    header(format!(
        "Health Timeline ({} of {})",
        view.len(),
        view.total()
    ));
    println!("{}", view.state().describe());

    match view.view_state() {
        ViewState::NoResults => {
            println!();
            println!("{NO_RESULTS}");
            hint(CLEAR_HINT);
        }
        ViewState::HasResults => {
            if details {
                for r in view.results() {
                    println!();
                    print!("{}", record_card(r));
                }
            } else {
                print!("{}", timeline_table(view.results(), separator));
            }
        }
    }

    if !view.query().is_empty() {
        println!("Query: ?{}", view.query());
    }
}

/// Detail drawer: reference range, sparkline and last five results.
pub fn trend_drawer(trend: &LabTrend) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", bold(&format!("{} Trend", trend.title))));
    out.push_str(&format!(
        "Reference: {} - {} {}\n\n",
        format_value(trend.low),
        format_value(trend.high),
        trend.unit
    ));

    out.push_str("Trend Over Time\n");
    out.push_str(&format!("  {}\n", sparkline_text(&trend.values())));

    let labels: Vec<String> = trend
        .points
        .iter()
        .map(|p| p.date.as_ref().map(format_short).unwrap_or_else(|| "?".into()))
        .collect();
    out.push_str(&format!("  {}\n\n", labels.join(" · ")));

    out.push_str("Last 5 Results\n");
    let mut table = Table::new(vec![
        Column::new("DATE", 14),
        Column::new("VALUE", 14),
        Column::new("STATUS", 8),
    ]);
    for p in trend.latest(5) {
        let date = p
            .date
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "--".into());
        table.add_row(vec![
            colorize_optional(&date),
            format!("{} {}", format_value(p.value), trend.unit),
            status_colour(p.status).paint(p.status.label()).to_string(),
        ]);
    }
    out.push_str(&table.render());

    out
}
