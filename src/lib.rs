//! rDelivery library root.
//! Exposes the CLI parser, the high-level run() function and the delivery
//! slot, working-hours and theme modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Slots { .. } => cli::commands::slots::handle(cli, cfg),
        Commands::Dates { .. } => cli::commands::dates::handle(cli, cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(cli, cfg),
        Commands::Theme { .. } => cli::commands::theme::handle(cli),
        Commands::Color { .. } => cli::commands::color::handle(cli),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // settings file given on the command line wins over the config
    if let Some(custom) = &cli.settings {
        cfg.settings_file = custom.clone();
    }

    logging::init(&cfg.log_level);

    dispatch(&cli, &cfg)
}
