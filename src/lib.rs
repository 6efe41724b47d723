//! courtbook library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! behind it: REST client, booking-grid logic, session handling and exports.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "COURTBOOK_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. }
        | Commands::Register { .. }
        | Commands::Logout
        | Commands::Whoami => cli::commands::auth::handle(&cli.command, cfg),
        Commands::Grid { .. } => cli::commands::grid::handle(&cli.command, cfg),
        Commands::Book { .. } | Commands::Unbook { .. } | Commands::Permanent { .. } => {
            cli::commands::booking::handle(&cli.command, cfg)
        }
        Commands::Courts { .. } => cli::commands::courts::handle(&cli.command, cfg),
        Commands::Clients { .. } => cli::commands::clients::handle(&cli.command, cfg),
        Commands::Users { .. } => cli::commands::users::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Logs { .. } => cli::commands::logs::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `COURTBOOK_LOG` wins over the config level.
fn init_tracing(cfg: &Config) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.as_str()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load the config once
    let mut cfg = Config::load()?;

    // 3. command-line overrides
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    if let Some(token_file) = &cli.token_file {
        cfg.token_file = token_file.clone();
    }

    init_tracing(&cfg);
    tracing::debug!(api_url = %cfg.api_url, "configuration loaded");

    // 4. hand over to the dispatcher
    dispatch(&cli, &cfg)
}
