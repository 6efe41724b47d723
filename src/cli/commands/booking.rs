//! `book`, `unbook` and `permanent`: edits of a single grid cell.

use chrono::{NaiveDate, Utc};

use crate::api::{ApiClient, Refreshed};
use crate::cli::commands::grid::print_grid;
use crate::cli::commands::{after_mutation, connect_logged_in};
use crate::cli::parser::{Commands, SlotArgs};
use crate::config::Config;
use crate::core::cell::{BookingDraft, SaveAction, check_delete, check_toggle_permanent, plan_save};
use crate::core::client_choice::ClientChoice;
use crate::core::events::{DataEvent, Entity};
use crate::core::grid::{GridCell, WeekGrid};
use crate::core::session::SessionState;
use crate::core::slots::{day_key, find_booking};
use crate::core::week::WeekCursor;
use crate::errors::{AppError, AppResult};
use crate::models::{Client, ClientPayload, Court};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::date::parse_date;
use crate::utils::time::parse_hour_arg;

/// A cell loaded together with the week it belongs to.
struct LoadedCell {
    court: Court,
    day: NaiveDate,
    hour: String,
    cell: GridCell,
}

fn load_cell(api: &ApiClient, session: &SessionState, slot: &SlotArgs) -> AppResult<LoadedCell> {
    let court = api.court(&slot.court)?;
    let day = parse_date(&slot.date).ok_or_else(|| AppError::InvalidDate(slot.date.clone()))?;
    let hour = parse_hour_arg(&slot.hour)?;

    let week = WeekCursor::new(day);
    let bookings = api.bookings_for_week(&court.id, &week)?;
    let grid = WeekGrid::build(week, &bookings, Utc::now(), session.is_admin());

    let cell = grid
        .cell(day, &hour)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("slot {} {}", day_key(day), hour)))?;

    Ok(LoadedCell {
        court,
        day,
        hour,
        cell,
    })
}

fn booking_entity(loaded: &LoadedCell) -> Entity {
    Entity::Booking {
        court_id: loaded.court.id.clone(),
        day: loaded.day,
    }
}

/// Known clients for name matching. A failed read only disables matching.
fn known_clients(api: &ApiClient) -> AppResult<Vec<Client>> {
    match api.clients() {
        Ok(list) => Ok(list),
        Err(e) if e.is_session_error() => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "client list unavailable");
            Ok(Vec::new())
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Book {
            slot,
            client,
            deposit,
            note,
            arrived,
            not_arrived,
            add_client,
        } => {
            let (api, session) = connect_logged_in(cfg)?;
            let loaded = load_cell(&api, &session, slot)?;

            let typed = client
                .clone()
                .or_else(|| loaded.cell.booking.as_ref().map(|b| b.client_name.clone()))
                .ok_or_else(|| AppError::Validation("--client is required for a new booking".into()))?;

            let clients = known_clients(&api)?;
            let choice = ClientChoice::resolve(&typed, &clients, session.is_admin(), *add_client);

            let arrival = match (*arrived, *not_arrived) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            if arrival.is_some() && !session.is_admin() {
                warning("Only admins can record arrivals; the booking keeps the not-arrived status.");
            }

            let draft = BookingDraft {
                client: choice,
                deposit: *deposit,
                deposit_note: note.clone(),
                arrived: arrival,
            };
            let mut action = plan_save(&draft, &loaded.cell, &loaded.court.id, session.role())?;

            if let ClientChoice::AddNew { name } = &draft.client {
                let created = api.create_client(&ClientPayload {
                    name: name.clone(),
                    ..ClientPayload::default()
                })?;
                success(DataEvent::Created(Entity::Client));
                match &mut action {
                    SaveAction::Create(request) | SaveAction::Update { request, .. } => {
                        request.client = Some(created.id)
                    }
                }
            }

            let event = match &action {
                SaveAction::Create(request) => {
                    api.create_booking(request)?;
                    DataEvent::Created(booking_entity(&loaded))
                }
                SaveAction::Update { id, request } => {
                    api.update_booking(id, request)?;
                    DataEvent::Updated(booking_entity(&loaded))
                }
            };

            show_week(&api, &session, &event, &loaded)?;
        }

        Commands::Unbook { slot, yes } => {
            let (api, session) = connect_logged_in(cfg)?;
            let loaded = load_cell(&api, &session, slot)?;
            let booking = check_delete(&loaded.cell, session.role())?;

            let prompt = format!(
                "Delete the booking of {} on {} at {}?",
                booking.client_name,
                day_key(loaded.day),
                loaded.hour
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            api.delete_booking(&booking.id)?;
            show_week(&api, &session, &DataEvent::Deleted(booking_entity(&loaded)), &loaded)?;
        }

        Commands::Permanent { slot, off } => {
            let (api, session) = connect_logged_in(cfg)?;
            let loaded = load_cell(&api, &session, slot)?;
            let (booking, toggled) = check_toggle_permanent(&loaded.cell, session.role())?;

            let wanted = !*off;
            if toggled != wanted {
                info(if wanted {
                    "The booking is already permanent."
                } else {
                    "The booking is not permanent."
                });
                return Ok(());
            }

            api.set_booking_permanent(&booking.id, wanted)?;
            if wanted {
                info("The booking now repeats weekly for the next 12 months.");
            }
            show_week(&api, &session, &DataEvent::Updated(booking_entity(&loaded)), &loaded)?;
        }

        _ => {}
    }

    Ok(())
}

/// Refetch the week after a mutation, locate the slot again and print the grid.
fn show_week(api: &ApiClient, session: &SessionState, event: &DataEvent, loaded: &LoadedCell) -> AppResult<()> {
    let Refreshed::Week { week, bookings, .. } = after_mutation(api, event)? else {
        return Ok(());
    };

    match (find_booking(&bookings, loaded.day, &loaded.hour), event) {
        (None, DataEvent::Deleted(_)) => {}
        (Some(b), DataEvent::Deleted(_)) => {
            warning(format!("{} {} still shows {}", day_key(loaded.day), loaded.hour, b.client_name))
        }
        (Some(b), _) => info(format!(
            "{} {}: {} ({})",
            day_key(loaded.day),
            loaded.hour,
            b.client_name,
            b.status.label()
        )),
        (None, _) => warning(format!(
            "The booking at {} {} could not be found after saving.",
            day_key(loaded.day),
            loaded.hour
        )),
    }

    let grid = WeekGrid::build(week, &bookings, Utc::now(), session.is_admin());
    print_grid(&grid, &loaded.court);
    Ok(())
}
