use chrono::{NaiveDate, Utc};

use crate::core::slots::business_today;
use crate::errors::{AppError, AppResult};

/// Today in the business timezone.
pub fn today() -> NaiveDate {
    business_today(Utc::now())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date` argument, defaulting to today.
pub fn date_or_today(input: Option<&str>) -> AppResult<NaiveDate> {
    match input {
        None => Ok(today()),
        Some("today") => Ok(today()),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Column header for a grid day, e.g. "Mon 04/03".
pub fn day_header(d: NaiveDate) -> String {
    d.format("%a %d/%m").to_string()
}
