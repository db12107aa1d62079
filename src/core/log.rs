use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 48;

/// ANSI color for each kind of logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "timeline_viewed" => Colour::Cyan,
        "filters_cleared" => Colour::Yellow,
        "lab_trend_opened" => Colour::Green,
        "timeline_exported" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("trust_banner") => Colour::RGB(0, 124, 158),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

/// Paint only the operation word; cut the plain text to `MAX_OP_WIDTH`.
fn paint_op_target(e: &LogEntry) -> String {
    let colour = color_for_operation(&e.operation);
    let plain = op_target(e);

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", colour.paint(op), rest),
        None => colour.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let dates: Vec<String> = entries
            .iter()
            .map(|e| {
                chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone())
            })
            .collect();
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (e, date) in entries.iter().zip(&dates) {
            let painted = paint_op_target(e);
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&painted)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                date,
                painted,
                padding,
                strip_ansi(&e.message),
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
