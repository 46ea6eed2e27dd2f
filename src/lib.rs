//! TimeLoom library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod tui;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Menu) => cli::commands::menu::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(Commands::Dashboard) => cli::commands::dashboard::handle(cfg),
        Some(
            cmd @ (Commands::List | Commands::Summary | Commands::Chart | Commands::Heatmap),
        ) => cli::commands::report::handle(cmd, cfg),
        Some(cmd @ Commands::Del { .. }) => cli::commands::del::handle(cmd, cfg),
        Some(cmd @ Commands::Edit { .. }) => cli::commands::edit::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
        Some(cmd @ Commands::Backup { .. }) => cli::commands::backup::handle(cmd, cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when an existing configuration is broken
    let mut cfg = if matches!(cli.command, Some(Commands::Init)) {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom) = &cli.data {
        cfg.data_file = Config::resolve_data_file(custom, cli.test)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
