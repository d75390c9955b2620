use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if cfg.backend != Backend::Sqlite {
            warning("The internal log is only kept by the local database.");
            return Ok(());
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        LogLogic::print_log(&store.pool().conn)?;
    }

    Ok(())
}
