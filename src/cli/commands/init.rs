use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let path = Config::config_file();

    println!("⚙️  Initializing subtracker…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database    : {}", &cfg.database);

    let mut store = SqliteStore::open(&cfg.database)?;

    // the audit row is informative only
    if let Err(e) = log::stlog(
        &store.pool().conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
