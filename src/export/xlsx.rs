// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{WeekSnapshot, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::models::ArrivalStatus;
use crate::ui::messages::info;
use crate::utils::colors::{font_for_background, rgb_value};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;

pub(crate) const SHEET_NAME: &str = "Bookings";
pub(crate) const HOUR_COLUMN_WIDTH: f64 = 10.0;
pub(crate) const DAY_COLUMN_WIDTH: f64 = 25.0;

const ARRIVED_FILL: u32 = 0x00FF00;
const NOT_ARRIVED_FILL: u32 = 0xFF0000;

/// Week grid as a styled worksheet: court color on every day cell,
/// arrival color on booked ones.
pub(crate) fn export_xlsx(snapshot: &WeekSnapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);

    for (col, header) in get_headers(snapshot).iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;
    }
    worksheet.set_freeze_panes(1, 1)?;

    // ---------------------------
    // Rows
    // ---------------------------
    let court_rgb = snapshot.court_rgb();

    for (row_index, row) in snapshot.rows.iter().enumerate() {
        let r = (row_index + 1) as u32;
        let cells = row_to_cells(row);

        worksheet.write_with_format(r, 0, cells[0].as_str(), &header_format)?;

        for (day_index, slot) in row.slots.iter().enumerate() {
            let c = (day_index + 1) as u16;
            let format = day_cell_format(court_rgb, slot.as_ref().map(|s| s.status));
            worksheet.write_with_format(r, c, cells[day_index + 1].as_str(), &format)?;
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    worksheet.set_column_width(0, HOUR_COLUMN_WIDTH)?;
    for c in 1..=snapshot.days.len() as u16 {
        worksheet.set_column_width(c, DAY_COLUMN_WIDTH)?;
    }

    workbook.save(path_str(path)?)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Background follows the arrival status when booked, the court color
/// otherwise. Font color always follows the court color brightness.
fn day_cell_format(court_rgb: Option<(u8, u8, u8)>, status: Option<ArrivalStatus>) -> Format {
    let mut fmt = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_border(FormatBorder::Thin);

    if let Some((r, g, b)) = court_rgb {
        fmt = fmt
            .set_background_color(Color::RGB(rgb_value(r, g, b)))
            .set_pattern(FormatPattern::Solid)
            .set_font_color(Color::RGB(font_for_background(r, g, b)));
    }

    match status {
        Some(ArrivalStatus::Arrived) => fmt
            .set_background_color(Color::RGB(ARRIVED_FILL))
            .set_pattern(FormatPattern::Solid),
        Some(ArrivalStatus::NotArrived) => fmt
            .set_background_color(Color::RGB(NOT_ARRIVED_FILL))
            .set_pattern(FormatPattern::Solid),
        None => fmt,
    }
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export(format!("invalid path: {}", path.display())))
}
