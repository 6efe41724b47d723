//! Session state and token inspection.
//!
//! The backend issues a JWT whose payload carries `exp` and the user
//! profile. The client never verifies the signature; it only reads the
//! claims to know who is logged in and whether the token is still usable.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenClaims {
    pub exp: i64,
    pub user: SessionUser,
}

impl TokenClaims {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        (self.exp as f64) < now.timestamp_millis() as f64 / 1000.0
    }
}

/// Decode the payload segment of a JWT.
pub fn decode_claims(token: &str) -> AppResult<TokenClaims> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(AppError::SessionInvalid("malformed token".into())),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::SessionInvalid(format!("undecodable token: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::SessionInvalid(format!("unexpected token claims: {e}")))
}

/// Result of the pre-request token check.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenCheck {
    Valid(TokenClaims),
    Expired,
    Invalid(String),
}

pub fn check_token(token: &str, now: DateTime<Utc>) -> TokenCheck {
    match decode_claims(token) {
        Ok(claims) if claims.is_expired(now) => TokenCheck::Expired,
        Ok(claims) => TokenCheck::Valid(claims),
        Err(AppError::SessionInvalid(msg)) => TokenCheck::Invalid(msg),
        Err(e) => TokenCheck::Invalid(e.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        user: SessionUser,
    },
}

impl SessionState {
    /// Rebuild the session from a stored token.
    ///
    /// Returns the state plus the reason the stored token was rejected, if it
    /// was. The caller is responsible for removing a rejected token.
    pub fn restore(stored: Option<&str>, now: DateTime<Utc>) -> (Self, Option<TokenCheck>) {
        let Some(token) = stored else {
            return (SessionState::Anonymous, None);
        };

        match check_token(token, now) {
            TokenCheck::Valid(claims) => (
                SessionState::Authenticated {
                    token: token.to_string(),
                    user: claims.user,
                },
                None,
            ),
            rejected => (SessionState::Anonymous, Some(rejected)),
        }
    }

    /// Transition on a token freshly returned by the backend.
    pub fn login(&self, token: &str, now: DateTime<Utc>) -> AppResult<Self> {
        match check_token(token, now) {
            TokenCheck::Valid(claims) => Ok(SessionState::Authenticated {
                token: token.to_string(),
                user: claims.user,
            }),
            TokenCheck::Expired => Err(AppError::SessionExpired),
            TokenCheck::Invalid(msg) => Err(AppError::SessionInvalid(msg)),
        }
    }

    pub fn logout(&self) -> Self {
        SessionState::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            SessionState::Anonymous => None,
        }
    }

    pub fn role(&self) -> Role {
        self.user().map(|u| u.role).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_admin()
    }

    pub fn require_user(&self) -> AppResult<&SessionUser> {
        self.user().ok_or(AppError::NotAuthenticated)
    }
}
