use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Response of `GET /clients/{id}/stats`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStats {
    pub client: Client,
    pub total_bookings: u32,
    pub arrived_bookings: u32,
    /// 0..1
    pub arrival_rate: f64,
    pub total_deposit: f64,
    pub avg_deposit: f64,
    #[serde(default)]
    pub last_booking: Option<String>,
}
