use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_fields};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            if path.exists() {
                info(format!("Current configuration ({}):\n", path.display()));
                ConfigLogic::print(&path)?;
            } else {
                warning("No configuration file yet, showing defaults (run `courtbook init`).");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        // ---- CHECK ----
        if *check {
            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is up to date.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `courtbook config --migrate` to add them with default values.");
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            if migrate_config(&path)? {
                success("Configuration file migrated.");
            } else {
                info("No migration needed.");
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }

    Ok(())
}
