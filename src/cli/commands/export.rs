use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::view::{FilterChange, TimelineView};
use crate::db::log::{events, track_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let mut view = TimelineView::new(
            ctx.store.records(),
            filters.initial_state(),
            ctx.today,
        );
        if filters.clear {
            view.apply(FilterChange::Reset);
        }

        ExportLogic::export(view.results(), *format, file, *force)?;

        let pool = DbPool::open_ready(&ctx.cfg.database)?;
        track_quiet(
            &pool.conn,
            events::TIMELINE_EXPORTED,
            format.as_str(),
            &format!("{} record(s) → {file} [{}]", view.len(), view.query()),
        );
    }
    Ok(())
}
