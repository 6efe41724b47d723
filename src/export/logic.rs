// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, save_blob};
use crate::export::model::WeekSnapshot;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one court's week in the requested format.
    pub fn export_week(
        snapshot: &WeekSnapshot,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if snapshot.booked_count() == 0 {
            warning("No bookings in this week; exporting an empty grid.");
        }

        tracing::debug!(path = %path.display(), format = format.as_str(), "exporting week");

        match format {
            ExportFormat::Csv => export_csv(snapshot, path),
            ExportFormat::Json => export_json(snapshot, path),
            ExportFormat::Xlsx => export_xlsx(snapshot, path),
        }
    }

    /// Store a server-generated report.
    pub fn save_report(bytes: &[u8], path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "saving report");
        save_blob(bytes, path)
    }
}
