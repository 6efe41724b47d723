use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::{User, UserPayload};

impl ApiClient {
    pub fn users(&self) -> AppResult<Vec<User>> {
        self.get_json("/users", &[])
    }

    pub fn create_user(&self, payload: &UserPayload) -> AppResult<serde_json::Value> {
        self.post_json("/users", payload)
    }

    pub fn update_user(&self, id: &str, payload: &UserPayload) -> AppResult<serde_json::Value> {
        self.put_json(&format!("/users/{id}"), payload)
    }

    pub fn delete_user(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/users/{id}"))
    }

    /// Address list; the backend answers with plain strings or `{ email }` objects.
    pub fn user_emails(&self) -> AppResult<Vec<String>> {
        let raw: Vec<serde_json::Value> = self.get_json("/users/emails", &[])?;
        Ok(raw
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                other => other
                    .get("email")
                    .and_then(|e| e.as_str())
                    .map(str::to_string),
            })
            .collect())
    }
}
