//! Week axis and hour axis of the booking grid.

use chrono::{Datelike, Days, NaiveDate};

use crate::core::slots::day_key;

pub const FIRST_HOUR: u32 = 6;
pub const HOURS_PER_DAY: u32 = 18;

/// "06:00" .. "23:00", one label per whole hour.
pub fn hour_labels() -> Vec<String> {
    (FIRST_HOUR..FIRST_HOUR + HOURS_PER_DAY)
        .map(|h| format!("{:02}:00", h))
        .collect()
}

/// Canonical grid label for user input ("6" or "6:00" → "06:00"), if the hour is on the axis.
pub fn normalize_hour_label(input: &str) -> Option<String> {
    let hour = crate::core::slots::parse_hour_label(input)?;
    (FIRST_HOUR..FIRST_HOUR + HOURS_PER_DAY)
        .contains(&hour)
        .then(|| format!("{:02}:00", hour))
}

/// Cursor over the displayed week. Any date inside the week can be the
/// cursor; the displayed days always start on Monday.
///
/// The cursor stays at least six days away from both ends of the calendar,
/// so every day of its week exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    current: NaiveDate,
}

fn cursor_bounds() -> (NaiveDate, NaiveDate) {
    (NaiveDate::MIN + Days::new(6), NaiveDate::MAX - Days::new(6))
}

impl WeekCursor {
    /// Dates at the very edge of the calendar are pulled inside the bounds.
    pub fn new(current: NaiveDate) -> Self {
        let (first, last) = cursor_bounds();
        Self {
            current: current.clamp(first, last),
        }
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn monday(&self) -> NaiveDate {
        let offset = self.current.weekday().num_days_from_monday() as u64;
        self.current - Days::new(offset)
    }

    pub fn days(&self) -> [NaiveDate; 7] {
        let start = self.monday();
        std::array::from_fn(|i| start + Days::new(i as u64))
    }

    /// Stays on the last representable week.
    pub fn next(self) -> Self {
        self.shift(1).unwrap_or(self)
    }

    /// Stays on the first representable week.
    pub fn previous(self) -> Self {
        self.shift(-1).unwrap_or(self)
    }

    /// Step by `weeks` (negative goes back); `None` past the calendar's range.
    pub fn shift(self, weeks: i64) -> Option<Self> {
        let days = Days::new(weeks.checked_mul(7)?.unsigned_abs());
        let moved = if weeks >= 0 {
            self.current.checked_add_days(days)
        } else {
            self.current.checked_sub_days(days)
        }?;

        let (first, last) = cursor_bounds();
        (first..=last).contains(&moved).then_some(Self { current: moved })
    }

    /// First and last day keys, as sent to the range endpoint.
    pub fn range_keys(&self) -> (String, String) {
        let days = self.days();
        (day_key(days[0]), day_key(days[6]))
    }

    /// "Week of 4 Mar to 10 Mar 2024"
    pub fn title(&self) -> String {
        let days = self.days();
        format!(
            "Week of {} to {}",
            days[0].format("%-d %b"),
            days[6].format("%-d %b %Y")
        )
    }
}
