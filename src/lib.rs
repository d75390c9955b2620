//! subtracker library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (calculator, stores, config) for direct use.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Backend, Config};
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, reference),
        Commands::Notify => cli::commands::notify::handle(cfg, reference),
        Commands::Summary => cli::commands::summary::handle(cfg, reference),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, reference),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Apply the global `--db` / `--api` overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, mut cfg: Config) -> Config {
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
        cfg.backend = Backend::Sqlite;
    }

    if let Some(api) = &cli.api {
        cfg.api_base = api.clone();
        cfg.backend = Backend::Http;
    }

    cfg
}

/// Reference date for renewal computations: `--on` or today.
pub fn reference_date(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.on {
        Some(raw) => utils::date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone())),
        None => Ok(utils::date::today()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    // config is loaded once, then adjusted by the global flags
    let cfg = apply_overrides(&cli, Config::load()?);
    let reference = reference_date(&cli)?;

    tracing::debug!(backend = ?cfg.backend, %reference, "dispatching command");
    dispatch(&cli, &cfg, reference)
}
