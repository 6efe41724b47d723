use chrono::{NaiveDate, TimeZone, Utc};

use courtbook::core::slots::{
    booking_day_key, day_key, day_key_of_instant, find_booking, is_past, parse_hour_label,
};

mod common;
use common::booking;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 2024-03-04 15:30 in Guatemala (UTC-6).
fn afternoon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 21, 30, 0).unwrap()
}

#[test]
fn test_plain_date_is_used_verbatim() {
    assert_eq!(booking_day_key("2024-03-04").as_deref(), Some("2024-03-04"));
}

#[test]
fn test_iso_date_is_converted_to_business_day() {
    // 03:00 UTC is still the previous evening in Guatemala.
    assert_eq!(
        booking_day_key("2024-03-05T03:00:00.000Z").as_deref(),
        Some("2024-03-04")
    );
    assert_eq!(
        booking_day_key("2024-03-04T14:00:00Z").as_deref(),
        Some("2024-03-04")
    );
    assert_eq!(
        booking_day_key("2024-03-04T23:30:00-06:00").as_deref(),
        Some("2024-03-04")
    );
}

#[test]
fn test_unparseable_instant_has_no_day() {
    assert_eq!(booking_day_key("2024-03-04Tgarbage"), None);
}

#[test]
fn test_day_key_of_instant_uses_business_timezone() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 5, 5, 59, 0).unwrap();
    assert_eq!(day_key_of_instant(&instant), "2024-03-04");
    assert_eq!(day_key(d(2024, 3, 4)), "2024-03-04");
}

#[test]
fn test_hour_label_leading_digits() {
    assert_eq!(parse_hour_label("14:00"), Some(14));
    assert_eq!(parse_hour_label("6:00"), Some(6));
    assert_eq!(parse_hour_label("06:00"), Some(6));
    assert_eq!(parse_hour_label("noon"), None);
}

#[test]
fn test_time_slot_decides_hour_not_instant_time() {
    let bookings = vec![booking("b1", "2024-03-04T14:00:00Z", "08:00", "Luis")];

    assert!(find_booking(&bookings, d(2024, 3, 4), "08:00").is_some());
    assert!(find_booking(&bookings, d(2024, 3, 4), "14:00").is_none());
}

#[test]
fn test_single_and_double_digit_slots_match() {
    let bookings = vec![booking("b1", "2024-03-04", "6:00", "Luis")];
    let found = find_booking(&bookings, d(2024, 3, 4), "06:00").expect("matched");
    assert_eq!(found.id, "b1");
}

#[test]
fn test_first_booking_wins_on_double_booking() {
    let bookings = vec![
        booking("first", "2024-03-04", "10:00", "Luis"),
        booking("second", "2024-03-04T16:00:00Z", "10:00", "Marta"),
    ];
    let found = find_booking(&bookings, d(2024, 3, 4), "10:00").expect("matched");
    assert_eq!(found.id, "first");
}

#[test]
fn test_bad_slot_never_matches() {
    let bookings = vec![
        booking("b1", "2024-03-04", "late", "Luis"),
        booking("b2", "not-a-dateTxx", "10:00", "Marta"),
    ];
    assert!(find_booking(&bookings, d(2024, 3, 4), "10:00").is_none());
    assert!(find_booking(&bookings, d(2024, 3, 4), "xx").is_none());
}

#[test]
fn test_is_past_for_regular_user() {
    let now = afternoon();

    assert!(is_past(d(2024, 3, 4), "14:00", now, false));
    assert!(!is_past(d(2024, 3, 4), "15:00", now, false));
    assert!(!is_past(d(2024, 3, 4), "16:00", now, false));
    assert!(!is_past(d(2024, 3, 5), "00:00", now, false));
    assert!(is_past(d(2024, 3, 3), "23:00", now, false));
}

#[test]
fn test_is_past_never_for_privileged() {
    let now = afternoon();
    assert!(!is_past(d(2024, 3, 4), "14:00", now, true));
    assert!(!is_past(d(2020, 1, 1), "06:00", now, true));
}

#[test]
fn test_unparseable_hour_today_is_not_past() {
    assert!(!is_past(d(2024, 3, 4), "soon", afternoon(), false));
}
