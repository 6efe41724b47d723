// src/export/model.rs

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::grid::{GridCell, WeekGrid};
use crate::models::{ArrivalStatus, Court};
use crate::utils::colors::parse_hex_color;

/// One booked slot as it appears in an export.
#[derive(Serialize, Clone, Debug)]
pub struct BookedSlot {
    pub client: String,
    pub deposit: f64,
    pub status: ArrivalStatus,
    pub permanent: bool,
}

impl BookedSlot {
    /// Three-line cell text: client, deposit and arrival label.
    pub fn cell_text(&self) -> String {
        format!(
            "{}\nDeposit: {}\nStatus: {}",
            self.client,
            self.deposit,
            self.status.label()
        )
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SnapshotRow {
    pub hour: String,
    /// Monday first; `None` for a free slot.
    pub slots: Vec<Option<BookedSlot>>,
}

/// Flat copy of a court's week, independent of the grid model.
#[derive(Serialize, Clone, Debug)]
pub struct WeekSnapshot {
    pub court: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub rows: Vec<SnapshotRow>,
}

fn slot_of(cell: &GridCell) -> Option<BookedSlot> {
    cell.booking.as_ref().map(|b| BookedSlot {
        client: b.client_name.clone(),
        deposit: b.deposit,
        status: b.status,
        permanent: b.is_permanent,
    })
}

impl WeekSnapshot {
    pub fn from_grid(grid: &WeekGrid, court: &Court) -> Self {
        let days = grid.days.to_vec();
        let rows = grid
            .rows
            .iter()
            .map(|r| SnapshotRow {
                hour: r.hour.clone(),
                slots: r.cells.iter().map(slot_of).collect(),
            })
            .collect();

        Self {
            court: court.name.clone(),
            color: (!court.color.trim().is_empty()).then(|| court.color.clone()),
            start: days[0],
            end: days[days.len() - 1],
            days,
            rows,
        }
    }

    /// "Bookings_<court>_<start>_<end>.xlsx"
    pub fn default_file_name(&self, extension: &str) -> String {
        format!(
            "Bookings_{}_{}_{}.{}",
            self.court,
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d"),
            extension
        )
    }

    /// Court color as RGB, if it is a valid hex color.
    pub fn court_rgb(&self) -> Option<(u8, u8, u8)> {
        self.color.as_deref().and_then(parse_hex_color)
    }

    pub fn booked_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.slots.iter())
            .filter(|s| s.is_some())
            .count()
    }
}

/// Header row: "Hour" then "Monday 4" .. "Sunday 10".
pub(crate) fn get_headers(snapshot: &WeekSnapshot) -> Vec<String> {
    let mut headers = vec!["Hour".to_string()];
    headers.extend(
        snapshot
            .days
            .iter()
            .map(|d| format!("{} {}", d.format("%A"), d.day())),
    );
    headers
}

/// One row of cell texts (hour first). Free slots are empty strings.
pub(crate) fn row_to_cells(row: &SnapshotRow) -> Vec<String> {
    let mut out = vec![row.hour.clone()];
    out.extend(
        row.slots
            .iter()
            .map(|s| s.as_ref().map(BookedSlot::cell_text).unwrap_or_default()),
    );
    out
}
