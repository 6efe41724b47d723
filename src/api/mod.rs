//! Blocking REST client for the court booking backend.
//!
//! Every request except login and registration goes through
//! [`ApiClient::send`], which checks the stored session token before anything
//! leaves the machine: an expired or undecodable token aborts the request and
//! is removed from disk.

mod auth;
mod bookings;
mod clients;
mod courts;
mod loader;
mod logs;
mod stats;
mod users;

pub use loader::Refreshed;
pub use stats::ReportKind;

use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::core::session::{TokenCheck, check_token};
use crate::errors::{AppError, AppResult};
use crate::session::TokenStore;
use crate::ui::messages;

/// Header the backend reads the session token from.
pub const AUTH_HEADER: &str = "x-auth-token";

pub struct ApiClient {
    base_url: String,
    http: HttpClient,
    store: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration, store: TokenStore) -> AppResult<Self> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            store,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(
            &cfg.api_url,
            Duration::from_secs(cfg.request_timeout_secs),
            TokenStore::new(&cfg.token_file),
        )
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the stored token, or abort locally if it is no longer usable.
    fn authorize(&self, req: RequestBuilder) -> AppResult<RequestBuilder> {
        let Some(token) = self.store.load()? else {
            return Ok(req);
        };

        match check_token(&token, Utc::now()) {
            TokenCheck::Valid(_) => Ok(req.header(AUTH_HEADER, token)),
            TokenCheck::Expired => {
                self.store.clear()?;
                messages::warning("Your session has expired. Please log in again to continue.");
                Err(AppError::SessionExpired)
            }
            TokenCheck::Invalid(reason) => {
                self.store.clear()?;
                warn!(%reason, "dropping undecodable session token");
                Err(AppError::SessionInvalid(reason))
            }
        }
    }

    fn send(&self, req: RequestBuilder) -> AppResult<Response> {
        self.execute(self.authorize(req)?)
    }

    /// Sends `req` as built, without touching the stored token.
    fn execute(&self, req: RequestBuilder) -> AppResult<Response> {
        let resp = req.send()?;
        let status = resp.status();
        debug!(url = %resp.url(), status = status.as_u16(), "api response");

        if status.is_success() {
            return Ok(resp);
        }

        let body = match resp.text() {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "could not read error body");
                String::new()
            }
        };
        Err(AppError::Api {
            status: status.as_u16(),
            message: server_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            }),
        })
    }

    pub(crate) fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<T> {
        let resp = self.send(self.http.get(self.url(path)).query(query))?;
        Ok(resp.json()?)
    }

    pub(crate) fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> AppResult<Vec<u8>> {
        let resp = self.send(self.http.get(self.url(path)).query(query))?;
        Ok(resp.bytes()?.to_vec())
    }

    pub(crate) fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let resp = self.send(self.http.post(self.url(path)).json(body))?;
        Ok(resp.json()?)
    }

    /// POST for endpoints that issue a session rather than require one.
    pub(crate) fn post_json_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let resp = self.execute(self.http.post(self.url(path)).json(body))?;
        Ok(resp.json()?)
    }

    pub(crate) fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let resp = self.send(self.http.put(self.url(path)).json(body))?;
        Ok(resp.json()?)
    }

    pub(crate) fn delete(&self, path: &str) -> AppResult<()> {
        self.send(self.http.delete(self.url(path)))?;
        Ok(())
    }
}

/// Error text from a JSON error body (`msg`, `message` or `error`), or the raw body.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for key in ["msg", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
        if let Some(text) = value
            .get("errors")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("msg"))
            .and_then(|v| v.as_str())
        {
            return Some(text.to_string());
        }
    }

    Some(trimmed.chars().take(200).collect())
}
