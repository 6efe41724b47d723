//! Slot matching and past-cell classification.
//!
//! Every calendar computation happens in the business timezone
//! (America/Guatemala). Day keys are `YYYY-MM-DD` strings, so comparing two
//! keys lexicographically is the same as comparing the dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::models::Booking;

/// Timezone every court operates in.
pub const BUSINESS_TZ: Tz = chrono_tz::America::Guatemala;

/// `YYYY-MM-DD` key of a business calendar day.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Business calendar day an absolute instant falls on.
pub fn local_date_of(instant: &DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&BUSINESS_TZ).date_naive()
}

pub fn day_key_of_instant(instant: &DateTime<Utc>) -> String {
    day_key(local_date_of(instant))
}

/// Wall-clock hour (0..=23) in the business timezone.
pub fn local_hour_of(instant: &DateTime<Utc>) -> u32 {
    instant.with_timezone(&BUSINESS_TZ).hour()
}

/// Integer hour of a slot label: leading digits, so "6:00", "06:00" and "6" all give 6.
pub fn parse_hour_label(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}

/// Calendar-day key of a stored booking date.
///
/// A value without a time component is a legacy plain date and is returned
/// verbatim. Anything else is an instant converted to the business timezone;
/// offset-less timestamps are read as business wall-clock time.
pub fn booking_day_key(raw: &str) -> Option<String> {
    if !raw.contains('T') {
        return Some(raw.to_string());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(day_key_of_instant(&dt.with_timezone(&Utc)));
    }

    let naive_formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
    for fmt in naive_formats {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return BUSINESS_TZ
                .from_local_datetime(&ndt)
                .earliest()
                .map(|local| day_key(local.date_naive()));
        }
    }

    None
}

/// (day key, hour) cell a booking occupies, if both parts are readable.
pub fn booking_slot(booking: &Booking) -> Option<(String, u32)> {
    let key = booking_day_key(&booking.date)?;
    let hour = parse_hour_label(&booking.time_slot)?;
    Some((key, hour))
}

/// First booking occupying the (day, hour) cell, in list order.
pub fn find_booking<'a>(bookings: &'a [Booking], day: NaiveDate, hour_label: &str) -> Option<&'a Booking> {
    let target_key = day_key(day);
    let target_hour = parse_hour_label(hour_label)?;

    bookings.iter().find(|b| {
        matches!(booking_slot(b), Some((key, hour)) if key == target_key && hour == target_hour)
    })
}

/// Whether the (day, hour) cell is locked for the actor at `now`.
///
/// Privileged actors never see locked cells.
pub fn is_past(day: NaiveDate, hour_label: &str, now: DateTime<Utc>, privileged: bool) -> bool {
    if privileged {
        return false;
    }

    let cell_key = day_key(day);
    let today_key = day_key_of_instant(&now);

    if cell_key < today_key {
        return true;
    }

    match parse_hour_label(hour_label) {
        Some(hour) => cell_key == today_key && hour < local_hour_of(&now),
        None => false,
    }
}

/// Today's business calendar day.
pub fn business_today(now: DateTime<Utc>) -> NaiveDate {
    local_date_of(&now)
}
