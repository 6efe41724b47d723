//! Time utilities: timestamp display and hour arguments.

use chrono::{DateTime, Utc};

use crate::core::slots::BUSINESS_TZ;
use crate::core::week::normalize_hour_label;
use crate::errors::{AppError, AppResult};

/// Render a server timestamp in business local time.
pub fn local_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&Utc)
                .with_timezone(&BUSINESS_TZ)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

/// Accepts "7", "07", "7:00" or "07:00" and returns the grid label "07:00".
pub fn parse_hour_arg(input: &str) -> AppResult<String> {
    normalize_hour_label(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}
