use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::banner::BannerLogic;
use crate::core::query::share_url;
use crate::core::view::{FilterChange, TimelineView};
use crate::db::log::{events, track_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, trust_banner};
use crate::ui::render::print_view;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Timeline {
        filters,
        details,
        share,
    } = cmd
    {
        let pool = DbPool::open_ready(&ctx.cfg.database)?;

        if BannerLogic::should_show(&pool.conn, ctx.cfg.trust_banner)? {
            trust_banner();
            println!();
        }

        let mut view = TimelineView::new(
            ctx.store.records(),
            filters.initial_state(),
            ctx.today,
        );

        if filters.clear && view.apply(FilterChange::Reset) {
            track_quiet(&pool.conn, events::FILTERS_CLEARED, "", "Filters reset to defaults");
        }

        print_view(&view, *details, ctx.separator());

        if *share {
            info(format!(
                "Share link: {}",
                share_url(&ctx.cfg.share_base_url, view.state())
            ));
        }

        track_quiet(
            &pool.conn,
            events::TIMELINE_VIEWED,
            view.query(),
            &format!("{} of {} events shown", view.len(), view.total()),
        );
    }
    Ok(())
}
