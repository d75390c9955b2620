use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut store = store::open(cfg)?;
        let written = ExportLogic::export(store.as_mut(), reference, *format, file, *force)?;
        tracing::debug!(format = format.as_str(), rows = written, "export done");
    }
    Ok(())
}
