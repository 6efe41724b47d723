//! One handler per top-level command, plus the helpers they share.

pub mod auth;
pub mod booking;
pub mod clients;
pub mod config;
pub mod courts;
pub mod export;
pub mod grid;
pub mod init;
pub mod logs;
pub mod stats;
pub mod users;

use chrono::Utc;

use crate::api::{ApiClient, Refreshed};
use crate::config::Config;
use crate::core::events::DataEvent;
use crate::core::session::SessionState;
use crate::errors::{AppError, AppResult};
use crate::models::Court;
use crate::session::restore_session;
use crate::ui::messages::success;
use crate::ui::prompt::read_line;

/// API client plus the session restored from the token file.
pub(crate) fn connect(cfg: &Config) -> AppResult<(ApiClient, SessionState)> {
    let api = ApiClient::from_config(cfg)?;
    let session = restore_session(api.token_store(), Utc::now())?;
    Ok((api, session))
}

/// Same as [`connect`] but fails when nobody is logged in.
pub(crate) fn connect_logged_in(cfg: &Config) -> AppResult<(ApiClient, SessionState)> {
    let (api, session) = connect(cfg)?;
    session.require_user()?;
    Ok((api, session))
}

pub(crate) fn require_admin(session: &SessionState, action: &str) -> AppResult<()> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!("only admins can {action}")))
    }
}

/// Report a mutation, refetch what it invalidated and print it.
pub(crate) fn after_mutation(api: &ApiClient, event: &DataEvent) -> AppResult<Refreshed> {
    success(event);
    let refreshed = api.refresh_after(event)?;

    match &refreshed {
        Refreshed::Courts(list) => courts::print_courts(list),
        Refreshed::Clients(list) => clients::print_clients(list),
        Refreshed::Users(list) => users::print_users(list),
        // Booking views print their own grid after locating the slot.
        Refreshed::Week { .. } => {}
    }

    Ok(refreshed)
}

/// Resolve a court for display. When the court list cannot be read the
/// key is used as both id and name.
pub(crate) fn resolve_court(api: &ApiClient, key: &str) -> AppResult<Court> {
    match api.court(key) {
        Ok(court) => Ok(court),
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) if e.is_session_error() => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, court = key, "court details unavailable");
            Ok(Court {
                id: key.to_string(),
                name: key.to_string(),
                color: String::new(),
                pricing: None,
            })
        }
    }
}

/// Password from the command line, or prompted.
pub(crate) fn password_or_prompt(given: &Option<String>) -> AppResult<String> {
    let password = match given {
        Some(p) => p.clone(),
        None => read_line("Password: ")?,
    };

    if password.is_empty() {
        return Err(AppError::Validation("a password is required".into()));
    }
    Ok(password)
}
