// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{WeekSnapshot, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(snapshot: &WeekSnapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(snapshot)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: same layout as the worksheet, one record per hour.
pub(crate) fn export_csv(snapshot: &WeekSnapshot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(get_headers(snapshot))
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &snapshot.rows {
        wtr.write_record(row_to_cells(row))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write a report file downloaded from the server as-is.
pub(crate) fn save_blob(bytes: &[u8], path: &Path) -> AppResult<()> {
    if bytes.is_empty() {
        return Err(AppError::Export("the server returned an empty file".into()));
    }

    let mut file = File::create(path)?;
    file.write_all(bytes)?;

    notify_export_success("Report", path);
    Ok(())
}
