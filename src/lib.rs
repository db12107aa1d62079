//! CareSync library root.
//! Exposes the CLI parser, the high-level run() function and the timeline
//! engine (record store, filter, query codec, derived view, lab trends).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::Context;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::RecordStore;
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, ctx),
        Commands::Browse { .. } => cli::commands::browse::handle(&cli.command, ctx),
        Commands::Trend { .. } => cli::commands::trend::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Banner { .. } => cli::commands::banner::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
    }
}

/// Diagnostic logging to stderr, filtered by CARESYNC_LOG or RUST_LOG.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(config::LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));

    // a second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolve configuration, records and "today" from the parsed CLI.
pub fn build_context(cli: &Cli) -> AppResult<Context> {
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
    }

    let store = match &cli.records {
        Some(path) => RecordStore::from_json_file(path)?,
        None => RecordStore::sample(),
    };

    let today = match &cli.today {
        Some(raw) => {
            utils::date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?
        }
        None => utils::date::today(),
    };

    tracing::debug!(
        records = store.len(),
        %today,
        database = %cfg.database,
        "context ready"
    );

    Ok(Context { cfg, store, today })
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let ctx = build_context(&cli)?;
    dispatch(&cli, &ctx)
}
