use chrono::Utc;

use crate::cli::commands::grid::week_cursor;
use crate::cli::commands::{connect_logged_in, resolve_court};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::WeekGrid;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, WeekSnapshot};
use crate::utils::path::resolve_output;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        court,
        week,
        format,
        file,
        force,
    } = cmd
    {
        let (api, session) = connect_logged_in(cfg)?;
        let court = resolve_court(&api, court)?;
        let cursor = week_cursor(week)?;

        let bookings = api.bookings_for_week(&court.id, &cursor)?;
        let grid = WeekGrid::build(cursor, &bookings, Utc::now(), session.is_admin());
        let snapshot = WeekSnapshot::from_grid(&grid, &court);

        let format = ExportFormat::resolve(*format, file.as_deref());
        let path = resolve_output(
            file.as_deref(),
            cfg.export_dir.as_deref(),
            &snapshot.default_file_name(format.as_str()),
        );

        ExportLogic::export_week(&snapshot, format, &path, *force)?;
    }

    Ok(())
}
