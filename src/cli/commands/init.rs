use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::{events, track_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing CareSync…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    DbPool::ensure_parent_dir(&db_path)?;
    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;

    success(format!(
        "Database initialized at {db_path} ({applied} migration(s) applied)"
    ));

    track_quiet(
        &pool.conn,
        events::INIT,
        "Database initialized",
        &format!("Database initialized at {db_path}"),
    );

    println!("🎉 CareSync initialization completed!");
    Ok(())
}
