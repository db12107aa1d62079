//! Color helpers for terminal output.

use crate::models::{EventType, TrendStatus};
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Marker color of each event category.
pub fn type_colour(kind: EventType) -> Colour {
    match kind {
        EventType::Lab => Colour::RGB(0, 124, 158),
        EventType::Prescription => Colour::RGB(16, 185, 129),
        EventType::Visit => Colour::RGB(245, 158, 11),
        EventType::Diagnosis => Colour::RGB(139, 92, 246),
    }
}

pub fn status_colour(status: TrendStatus) -> Colour {
    match status {
        TrendStatus::Normal => Colour::RGB(16, 185, 129),
        TrendStatus::High => Colour::RGB(239, 68, 68),
        TrendStatus::Low => Colour::RGB(59, 130, 246),
    }
}

pub const SPARKLINE_HEX: &str = "#007C9E";

pub fn paint_type(kind: EventType) -> String {
    type_colour(kind).bold().paint(kind.badge()).to_string()
}

/// Grey when empty, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
