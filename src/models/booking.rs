use serde::{Deserialize, Serialize};

use crate::models::arrival::ArrivalStatus;

/// Court reference inside a booking.
///
/// The range endpoints return the bare court id, while the per-client
/// bookings endpoint populates the court document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourtRef {
    Id(String),
    Populated {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    },
}

impl CourtRef {
    pub fn id(&self) -> &str {
        match self {
            CourtRef::Id(id) => id,
            CourtRef::Populated { id, .. } => id,
        }
    }

    /// Display name if the court was populated, otherwise the id.
    pub fn label(&self) -> &str {
        match self {
            CourtRef::Id(id) => id,
            CourtRef::Populated { name, .. } => name,
        }
    }
}

/// A booking record as returned by the backend.
///
/// `date` is kept raw: older records hold a plain `YYYY-MM-DD`, newer ones an
/// ISO instant. See [`crate::core::slots::booking_day_key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub court: CourtRef,
    pub date: String,
    pub time_slot: String,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default)]
    pub deposit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_note: Option<String>,
    pub status: ArrivalStatus,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_end_date: Option<String>,
}

/// Body for `POST /bookings` and `PUT /bookings/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub court: String,
    pub date: String,
    pub time_slot: String,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    pub deposit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_note: Option<String>,
    pub status: ArrivalStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PermanentToggle {
    pub is_permanent: bool,
}
