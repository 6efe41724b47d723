//! `login`, `register`, `logout` and `whoami`.

use chrono::Utc;

use crate::api::ApiClient;
use crate::cli::commands::{connect, password_or_prompt};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionState;
use crate::errors::AppResult;
use crate::session::TokenStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Login { email, password } => {
            let password = password_or_prompt(password)?;
            let api = ApiClient::from_config(cfg)?;
            let token = api.login(email, &password)?;
            let session = SessionState::default().login(&token, Utc::now())?;
            welcome(&session);
        }

        Commands::Register {
            name,
            email,
            password,
        } => {
            let password = password_or_prompt(password)?;
            let api = ApiClient::from_config(cfg)?;
            let token = api.register(name, email, &password)?;
            let session = SessionState::default().login(&token, Utc::now())?;
            welcome(&session);
        }

        Commands::Logout => {
            let store = TokenStore::new(&cfg.token_file);
            let had_token = store.load()?.is_some();
            store.clear()?;
            if had_token {
                success("Logged out.");
            } else {
                info("No active session.");
            }
        }

        Commands::Whoami => {
            let (_, session) = connect(cfg)?;
            match session.user() {
                Some(user) => {
                    println!("{} <{}>", user.name, user.email);
                    println!("id   : {}", user.id);
                    println!("role : {}", user.role.as_str());
                }
                None => info("Not logged in."),
            }
        }

        _ => {}
    }

    Ok(())
}

fn welcome(session: &SessionState) {
    if let Some(user) = session.user() {
        success(format!(
            "Logged in as {} ({})",
            user.name,
            user.role.as_str()
        ));
    }
}
