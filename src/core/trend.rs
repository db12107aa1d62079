use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, EventType, LabTrend, TrendPoint, TrendStatus};
use chrono::{Days, NaiveDate};

/// Readings are taken twice a year; the last one is the record itself.
pub const READING_INTERVAL_DAYS: u64 = 182;

/// Reference bounds and unit the detail view is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendScale {
    pub unit: String,
    pub low: f64,
    pub high: f64,
}

fn reading_date(last: Option<NaiveDate>, steps_back: usize) -> Option<NaiveDate> {
    last?.checked_sub_days(Days::new(READING_INTERVAL_DAYS * steps_back as u64))
}

/// Hand a lab record over to the detail view.
pub fn build_lab_trend(record: &EventRecord, scale: &TrendScale) -> AppResult<LabTrend> {
    if record.kind != EventType::Lab {
        return Err(AppError::NoTrendData(record.id));
    }

    let values = match &record.trend {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AppError::NoTrendData(record.id)),
    };

    let last = record.calendar_date();
    let n = values.len();

    let points = values
        .iter()
        .enumerate()
        .map(|(i, &value)| TrendPoint {
            date: reading_date(last, n - 1 - i),
            value,
            status: TrendStatus::classify(value, scale.low, scale.high),
        })
        .collect();

    Ok(LabTrend {
        record_id: record.id,
        title: record.title.clone(),
        unit: scale.unit.clone(),
        low: scale.low,
        high: scale.high,
        points,
    })
}

// ---------------------------
// Sparklines
// ---------------------------

const PADDING: f64 = 2.0;
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Plot coordinates inside a `width x height` box, `None` below two values.
pub fn sparkline_points(data: &[f64], width: f64, height: f64) -> Option<Vec<(f64, f64)>> {
    if data.len() < 2 {
        return None;
    }

    let chart_w = width - PADDING * 2.0;
    let chart_h = height - PADDING * 2.0;
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let last = (data.len() - 1) as f64;

    Some(
        data.iter()
            .enumerate()
            .map(|(i, v)| {
                let x = PADDING + (i as f64 / last) * chart_w;
                let y = PADDING + chart_h - ((v - min) / range) * chart_h;
                (x, y)
            })
            .collect(),
    )
}

fn fmt_coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    format!("{rounded}")
}

/// Standalone SVG document for the trend line.
pub fn sparkline_svg(data: &[f64], width: u32, height: u32, color: &str, show_points: bool) -> String {
    let (w, h) = (width as f64, height as f64);

    let Some(points) = sparkline_points(data, w, h) else {
        return format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" class="lab-trend-sparkline"><text x="50%" y="50%" text-anchor="middle" dy="0.35em" font-size="10" fill="#9ca3af">No data</text></svg>"##
        );
    };

    let path = points
        .iter()
        .map(|(x, y)| format!("{},{}", fmt_coord(*x), fmt_coord(*y)))
        .collect::<Vec<_>>()
        .join(" L ");

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" class="lab-trend-sparkline"><rect width="{width}" height="{height}" fill="transparent" rx="2"/><path d="M {path}" fill="none" stroke="{color}" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>"#
    );

    if show_points {
        for (x, y) in &points {
            svg.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="1.5" fill="{color}" stroke="white" stroke-width="0.5"/>"#,
                fmt_coord(*x),
                fmt_coord(*y)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// One block character per value, scaled between min and max.
pub fn sparkline_text(data: &[f64]) -> String {
    if data.len() < 2 {
        return "No data".to_string();
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let top = (BARS.len() - 1) as f64;

    data.iter()
        .map(|v| {
            let idx = (((v - min) / range) * top).round() as usize;
            BARS[idx.min(BARS.len() - 1)]
        })
        .collect()
}
