//! Hours × days model of one court's week.

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::slots::{find_booking, is_past};
use crate::core::week::{WeekCursor, hour_labels};
use crate::models::Booking;

#[derive(Debug, Clone)]
pub struct GridCell {
    pub day: NaiveDate,
    pub hour: String,
    pub booking: Option<Booking>,
    pub past: bool,
}

#[derive(Debug, Clone)]
pub struct GridRow {
    pub hour: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone)]
pub struct WeekGrid {
    pub week: WeekCursor,
    pub days: [NaiveDate; 7],
    pub rows: Vec<GridRow>,
}

impl WeekGrid {
    pub fn build(week: WeekCursor, bookings: &[Booking], now: DateTime<Utc>, privileged: bool) -> Self {
        let days = week.days();

        let rows = hour_labels()
            .into_iter()
            .map(|hour| {
                let cells = days
                    .iter()
                    .map(|&day| GridCell {
                        day,
                        hour: hour.clone(),
                        booking: find_booking(bookings, day, &hour).cloned(),
                        past: is_past(day, &hour, now, privileged),
                    })
                    .collect();

                GridRow { hour, cells }
            })
            .collect();

        Self { week, days, rows }
    }

    pub fn cell(&self, day: NaiveDate, hour: &str) -> Option<&GridCell> {
        self.rows
            .iter()
            .find(|r| r.hour == hour)
            .and_then(|r| r.cells.iter().find(|c| c.day == day))
    }

    pub fn booked_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.booking.is_some())
            .count()
    }
}
