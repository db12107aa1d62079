//! Interactive timeline session: every input line is one filter interaction.

use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::trend::build_lab_trend;
use crate::core::view::{FilterChange, TimelineView};
use crate::db::log::{events, track_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{DateRange, TypeFilter};
use crate::ui::messages::{error, info, warning};
use crate::ui::render::{print_view, trend_drawer};
use std::io::{self, BufRead, IsTerminal, Write};

const HELP: &str = "\
Commands:
  filter <all|lab|prescription|visit|diagnosis>
  range <30d|90d|1y|all>
  search [text]        (no text clears the search)
  clear                reset every filter
  show                 print the current view
  query                print the current query string
  trend <id>           lab result history
  help
  quit";

/// Parsed input line.
#[derive(Debug, PartialEq)]
pub enum Input {
    Change(FilterChange),
    Show,
    Query,
    Trend(u32),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Search text is taken verbatim after the first space, other arguments
/// are trimmed.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (word, raw_rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };
    let rest = raw_rest.trim();

    match word {
        "" => Input::Empty,
        "filter" => match TypeFilter::from_wire(rest) {
            Some(t) => Input::Change(FilterChange::Type(t)),
            None => Input::Invalid(format!("unknown event type '{rest}'")),
        },
        "range" => match DateRange::from_wire(rest) {
            Some(r) => Input::Change(FilterChange::Range(r)),
            None => Input::Invalid(format!("unknown date range '{rest}'")),
        },
        "search" => Input::Change(FilterChange::Search(raw_rest.to_string())),
        "clear" | "reset" => Input::Change(FilterChange::Reset),
        "show" | "ls" => Input::Show,
        "query" => Input::Query,
        "trend" => match rest.parse() {
            Ok(id) => Input::Trend(id),
            Err(_) => Input::Invalid(format!("invalid record id '{rest}'")),
        },
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => Input::Invalid(format!("unknown command '{other}' (try 'help')")),
    }
}

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Browse { query: raw } = cmd {
        let pool = DbPool::open_ready(&ctx.cfg.database)?;
        let mut view = TimelineView::from_query(
            ctx.store.records(),
            raw.as_deref().unwrap_or(""),
            ctx.today,
        );

        track_quiet(&pool.conn, events::TIMELINE_VIEWED, view.query(), "browse session started");
        print_view(&view, false, ctx.separator());

        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        if interactive {
            println!("\nType 'help' for commands.");
        }

        let mut lines = stdin.lock().lines();
        loop {
            if interactive {
                print!("> ");
                io::stdout().flush().ok();
            }

            let Some(line) = lines.next() else { break };
            let line = line?;

            match parse_input(&line) {
                Input::Change(change) => {
                    let is_reset = change == FilterChange::Reset;
                    if view.apply(change) {
                        if is_reset {
                            track_quiet(&pool.conn, events::FILTERS_CLEARED, "", "Filters reset to defaults");
                        }
                        println!();
                        print_view(&view, false, ctx.separator());
                    } else {
                        info("Filters unchanged.");
                    }
                }
                Input::Show => print_view(&view, true, ctx.separator()),
                Input::Query => {
                    if view.query().is_empty() {
                        println!("Query: (default)");
                    } else {
                        println!("Query: ?{}", view.query());
                    }
                }
                Input::Trend(id) => show_trend(ctx, &pool, id),
                Input::Help => println!("{HELP}"),
                Input::Quit => break,
                Input::Empty => {}
                Input::Invalid(msg) => warning(msg),
            }
        }

        tracing::debug!(
            recomputations = view.recomputations(),
            final_query = view.query(),
            "browse session ended"
        );
    }
    Ok(())
}

fn show_trend(ctx: &Context, pool: &DbPool, id: u32) {
    let Some(record) = ctx.store.get(id) else {
        error(format!("No record with id {id}"));
        return;
    };

    let scale = ctx.trend_scale();

    match build_lab_trend(record, &scale) {
        Ok(trend) => {
            print!("{}", trend_drawer(&trend));
            track_quiet(
                &pool.conn,
                events::LAB_TREND_OPENED,
                &trend.title,
                &format!("{} result(s)", trend.points.len()),
            );
        }
        Err(e) => error(e),
    }
}
