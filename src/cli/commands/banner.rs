use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::banner::BannerLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Banner { dismiss, reset } = cmd {
        let pool = DbPool::open_ready(&ctx.cfg.database)?;

        if *dismiss {
            BannerLogic::dismiss(&pool.conn)?;
            success("Trust banner dismissed.");
        } else if *reset {
            BannerLogic::reset(&pool.conn)?;
            success("Trust banner restored.");
        } else {
            let state = if !ctx.cfg.trust_banner {
                "disabled in configuration"
            } else if BannerLogic::is_dismissed(&pool.conn)? {
                "dismissed"
            } else {
                "visible"
            };
            info(format!("Trust banner: {state}"));
        }
    }
    Ok(())
}
