use serde::Deserialize;

/// Append-only audit entry kept by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: String,
    pub user: String,
    pub action: String,
}
