use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and writes a configuration file with the
/// defaults; `--api-url` and `--token-file` are stored when given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { force } = &cli.command else {
        return Ok(());
    };

    let mut cfg = Config::init_all(cli.api_url.clone(), *force)?;

    if let Some(token_file) = &cli.token_file {
        cfg.token_file = token_file.clone();
        cfg.save()?;
    }

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Backend     : {}", cfg.api_url));
    info(format!("Token file  : {}", cfg.token_file));
    success("courtbook initialization completed!");
    Ok(())
}
