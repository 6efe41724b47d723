use chrono::Utc;

use crate::cli::commands::{connect_logged_in, resolve_court};
use crate::cli::parser::{Commands, WeekArgs};
use crate::config::Config;
use crate::core::grid::{GridCell, WeekGrid};
use crate::core::week::WeekCursor;
use crate::errors::{AppError, AppResult};
use crate::models::{ArrivalStatus, Court};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_arrival, paint};
use crate::utils::date::{date_or_today, day_header};
use crate::utils::format_currency;
use crate::utils::table::{Column, Table, truncate};

const HOUR_WIDTH: usize = 5;
const DAY_WIDTH: usize = 13;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Grid { court, week } = cmd {
        let (api, session) = connect_logged_in(cfg)?;
        let court = resolve_court(&api, court)?;
        let cursor = week_cursor(week)?;

        let bookings = api.bookings_for_week(&court.id, &cursor)?;
        let grid = WeekGrid::build(cursor, &bookings, Utc::now(), session.is_admin());
        print_grid(&grid, &court);
    }
    Ok(())
}

/// Week selected by `--date` and `--week`.
pub(crate) fn week_cursor(args: &WeekArgs) -> AppResult<WeekCursor> {
    let day = date_or_today(args.date.as_deref())?;
    WeekCursor::new(day).shift(args.offset).ok_or_else(|| {
        AppError::InvalidDate(format!("{} weeks from {} is out of range", args.offset, day))
    })
}

fn cell_text(cell: &GridCell) -> String {
    match &cell.booking {
        Some(b) => {
            let mut name = truncate(&b.client_name, DAY_WIDTH - 1);
            if b.is_permanent {
                name.push('*');
            }
            paint(&name, color_for_arrival(b.status))
        }
        None if cell.past => paint("--", GREY),
        None => String::new(),
    }
}

pub(crate) fn print_grid(grid: &WeekGrid, court: &Court) {
    header(format!("{} | {}", court.name, grid.week.title()));

    let mut columns = vec![Column::new("Hour", HOUR_WIDTH)];
    columns.extend(grid.days.iter().map(|d| Column::new(&day_header(*d), DAY_WIDTH)));

    let mut table = Table::new(columns);
    for row in &grid.rows {
        let mut cells = vec![row.hour.clone()];
        cells.extend(row.cells.iter().map(cell_text));
        table.add_row(cells);
    }
    print!("{}", table.render());

    println!(
        "{} booked | * permanent | {} / {}",
        grid.booked_count(),
        paint("arrived", color_for_arrival(ArrivalStatus::Arrived)),
        paint("not arrived", color_for_arrival(ArrivalStatus::NotArrived)),
    );

    if let Some(pricing) = &court.pricing {
        let bands: Vec<String> = pricing
            .bands()
            .iter()
            .map(|(label, price)| format!("{label} {}", format_currency(*price)))
            .collect();
        println!("Prices: {}", bands.join(" | "));
    }
}
