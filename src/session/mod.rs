pub mod store;

pub use store::TokenStore;

use chrono::{DateTime, Utc};

use crate::core::session::{SessionState, TokenCheck};
use crate::errors::AppResult;
use crate::ui::messages::{error, warning};

/// Restore the session on startup, dropping a stored token that is no longer usable.
pub fn restore_session(store: &TokenStore, now: DateTime<Utc>) -> AppResult<SessionState> {
    let stored = store.load()?;
    let (state, rejected) = SessionState::restore(stored.as_deref(), now);

    match rejected {
        Some(TokenCheck::Expired) => {
            store.clear()?;
            warning("Your session has expired. Please log in again to continue.");
        }
        Some(TokenCheck::Invalid(reason)) => {
            store.clear()?;
            tracing::warn!(%reason, "stored token rejected");
            error("There was a problem with your session. Please log in again.");
        }
        _ => {}
    }

    Ok(state)
}
