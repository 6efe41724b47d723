use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ReAuth<'a> {
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: Option<String>,
}

impl ApiClient {
    /// `POST /auth/login`; the returned token replaces the stored one.
    /// A rejected login keeps the previous session.
    pub fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let resp: TokenResponse = self.post_json_public("/auth/login", &Credentials { email, password })?;
        self.keep_token(resp)
    }

    /// `POST /auth/register`; the returned token replaces the stored one.
    pub fn register(&self, name: &str, email: &str, password: &str) -> AppResult<String> {
        let resp: TokenResponse = self.post_json_public(
            "/auth/register",
            &Registration {
                name,
                email,
                password,
            },
        )?;
        self.keep_token(resp)
    }

    /// `POST /auth/re-auth`: confirms the password before restricted views.
    pub fn re_auth(&self, password: &str) -> AppResult<()> {
        let _: serde_json::Value = self.post_json("/auth/re-auth", &ReAuth { password })?;
        Ok(())
    }

    fn keep_token(&self, resp: TokenResponse) -> AppResult<String> {
        let token = resp.token.ok_or_else(|| AppError::Api {
            status: 200,
            message: "no token in the authentication response".into(),
        })?;
        self.token_store().save(&token)?;
        Ok(token)
    }
}
