use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::open_ready(&ctx.cfg.database)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
