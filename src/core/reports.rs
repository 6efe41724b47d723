//! Display-side shaping of report data: rankings, paging and filters.
//! All aggregates come precomputed from the backend.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::slots::{BUSINESS_TZ, booking_day_key};
use crate::models::{ArrivalStatus, Booking, ClientReportRow, LogEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRanking {
    Bookings,
    Attendance,
}

pub const TOP_CLIENTS: usize = 10;

/// Highest-ranked clients first; ties keep the server order.
pub fn top_clients(rows: &[ClientReportRow], by: ClientRanking, limit: usize) -> Vec<ClientReportRow> {
    let mut sorted = rows.to_vec();
    match by {
        ClientRanking::Bookings => sorted.sort_by(|a, b| b.bookings_count.cmp(&a.bookings_count)),
        ClientRanking::Attendance => sorted.sort_by(|a, b| {
            b.attendance_rate
                .partial_cmp(&a.attendance_rate)
                .unwrap_or(Ordering::Equal)
        }),
    }
    sorted.truncate(limit);
    sorted
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn pages(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    /// "11-20 of 34"
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 of {}", self.total);
        }
        let first = (self.page - 1) * self.per_page + 1;
        let last = first + self.items.len() - 1;
        format!("{}-{} of {}", first, last, self.total)
    }
}

/// Slice `items` to the 1-based `page`. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let start = (page - 1).saturating_mul(per_page);

    let slice = if start >= items.len() {
        Vec::new()
    } else {
        items[start..(start + per_page).min(items.len())].to_vec()
    };

    Page {
        items: slice,
        page,
        per_page,
        total: items.len(),
    }
}

/// Filters on a client's booking history.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<ArrivalStatus>,
    /// Court display name.
    pub court: Option<String>,
    /// Inclusive business days.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl BookingFilter {
    pub fn matches(&self, b: &Booking) -> bool {
        if let Some(status) = self.status
            && b.status != status
        {
            return false;
        }

        if let Some(court) = &self.court
            && !b.court.label().eq_ignore_ascii_case(court.trim())
        {
            return false;
        }

        if self.from.is_none() && self.to.is_none() {
            return true;
        }

        let Some(day) = booking_day_key(&b.date)
            .and_then(|k| NaiveDate::parse_from_str(&k, "%Y-%m-%d").ok())
        else {
            return false;
        };

        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }

    pub fn apply<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings.iter().filter(|b| self.matches(b)).collect()
    }
}

/// Filters on the audit log, evaluated in business local time.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring.
    pub user: Option<String>,
    /// Prefix of the local `HH:MM:SS`, e.g. "14" or "14:05".
    pub time: Option<String>,
}

impl LogFilter {
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(user) = &self.user
            && !entry.user.to_lowercase().contains(&user.to_lowercase())
        {
            return false;
        }

        if self.date.is_none() && self.time.is_none() {
            return true;
        }

        let Some(local) = DateTime::parse_from_rfc3339(&entry.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).with_timezone(&BUSINESS_TZ))
        else {
            return false;
        };

        if let Some(date) = self.date
            && local.date_naive() != date
        {
            return false;
        }

        if let Some(time) = &self.time
            && !local.format("%H:%M:%S").to_string().starts_with(time.trim())
        {
            return false;
        }

        true
    }

    pub fn apply<'a>(&self, entries: &'a [LogEntry]) -> Vec<&'a LogEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}
