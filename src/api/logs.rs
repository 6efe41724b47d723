use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::LogEntry;

impl ApiClient {
    pub fn logs(&self) -> AppResult<Vec<LogEntry>> {
        self.get_json("/logs", &[])
    }
}
