use crate::api::ApiClient;
use crate::core::week::WeekCursor;
use crate::errors::AppResult;
use crate::models::booking::PermanentToggle;
use crate::models::{Booking, BookingRequest};

impl ApiClient {
    pub fn bookings_by_court(&self, court_id: &str) -> AppResult<Vec<Booking>> {
        self.get_json(&format!("/bookings/court/{court_id}"), &[])
    }

    /// Bookings of one court between two inclusive `YYYY-MM-DD` days.
    pub fn bookings_in_range(&self, court_id: &str, start: &str, end: &str) -> AppResult<Vec<Booking>> {
        self.get_json(
            &format!("/bookings/court/{court_id}/range"),
            &[("startDate", start.to_string()), ("endDate", end.to_string())],
        )
    }

    pub fn bookings_for_week(&self, court_id: &str, week: &WeekCursor) -> AppResult<Vec<Booking>> {
        let (start, end) = week.range_keys();
        self.bookings_in_range(court_id, &start, &end)
    }

    pub fn create_booking(&self, request: &BookingRequest) -> AppResult<serde_json::Value> {
        self.post_json("/bookings", request)
    }

    pub fn update_booking(&self, id: &str, request: &BookingRequest) -> AppResult<serde_json::Value> {
        self.put_json(&format!("/bookings/{id}"), request)
    }

    pub fn delete_booking(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/bookings/{id}"))
    }

    /// Make a booking repeat weekly for the next 12 months, or stop it.
    pub fn set_booking_permanent(&self, id: &str, is_permanent: bool) -> AppResult<serde_json::Value> {
        self.put_json(
            &format!("/bookings/{id}/permanent"),
            &PermanentToggle { is_permanent },
        )
    }
}
