use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::trend::{build_lab_trend, sparkline_svg};
use crate::db::log::{events, track_quiet};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::ui::render::trend_drawer;
use crate::utils::colors::SPARKLINE_HEX;
use std::fs;

const SVG_WIDTH: u32 = 400;
const SVG_HEIGHT: u32 = 120;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Trend { id, svg } = cmd {
        let record = ctx.store.get(*id).ok_or(AppError::RecordNotFound(*id))?;

        let trend = build_lab_trend(record, &ctx.trend_scale())?;

        print!("{}", trend_drawer(&trend));

        if let Some(path) = svg {
            let doc = sparkline_svg(&trend.values(), SVG_WIDTH, SVG_HEIGHT, SPARKLINE_HEX, true);
            fs::write(path, doc)?;
            success(format!("Sparkline written to {}", path.display()));
        }

        let pool = DbPool::open_ready(&ctx.cfg.database)?;
        track_quiet(
            &pool.conn,
            events::LAB_TREND_OPENED,
            &trend.title,
            &format!("{} result(s)", trend.points.len()),
        );
    }
    Ok(())
}
