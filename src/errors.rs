//! Unified application error type.
//! All modules (api, core, cli, export, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Transport / API
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Not logged in. Run `courtbook login` first")]
    NotAuthenticated,

    #[error("Your session has expired. Please log in again")]
    SessionExpired,

    #[error("There was a problem with your session ({0}). Please log in again")]
    SessionInvalid(String),

    #[error("Action not allowed: {0}")]
    Forbidden(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the errors that invalidate the stored session.
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            AppError::SessionExpired | AppError::SessionInvalid(_)
        )
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
