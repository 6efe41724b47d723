use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{Court, CourtPayload};

impl ApiClient {
    pub fn courts(&self) -> AppResult<Vec<Court>> {
        self.get_json("/courts", &[])
    }

    /// Look a court up by id, or by name when no id matches.
    pub fn court(&self, key: &str) -> AppResult<Court> {
        let courts = self.courts()?;
        courts
            .iter()
            .find(|c| c.id == key)
            .or_else(|| courts.iter().find(|c| c.name.eq_ignore_ascii_case(key)))
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("court '{key}'")))
    }

    pub fn create_court(&self, payload: &CourtPayload) -> AppResult<serde_json::Value> {
        self.post_json("/courts", payload)
    }

    pub fn update_court(&self, id: &str, payload: &CourtPayload) -> AppResult<serde_json::Value> {
        self.put_json(&format!("/courts/{id}"), payload)
    }

    pub fn delete_court(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/courts/{id}"))
    }

    /// Restricted duplicates; the backend expects a prior `re_auth`.
    pub fn original_courts(&self) -> AppResult<Vec<Court>> {
        self.get_json("/courts/originals", &[])
    }
}
