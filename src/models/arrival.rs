use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether a booked client actually showed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ArrivalStatus {
    #[serde(rename = "Llegó")]
    Arrived,
    #[serde(rename = "No llegó")]
    NotArrived,
}

impl ArrivalStatus {
    pub fn from_flag(arrived: bool) -> Self {
        if arrived {
            ArrivalStatus::Arrived
        } else {
            ArrivalStatus::NotArrived
        }
    }

    pub fn is_arrived(&self) -> bool {
        matches!(self, ArrivalStatus::Arrived)
    }

    /// Human-readable label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            ArrivalStatus::Arrived => "Arrived",
            ArrivalStatus::NotArrived => "Not arrived",
        }
    }
}
