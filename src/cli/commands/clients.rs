use crate::api::ApiClient;
use crate::cli::commands::{after_mutation, connect_logged_in, require_admin};
use crate::cli::parser::{ClientAction, Commands};
use crate::config::Config;
use crate::core::events::{DataEvent, Entity};
use crate::core::reports::BookingFilter;
use crate::core::slots::booking_day_key;
use crate::errors::{AppError, AppResult};
use crate::models::{Booking, Client, ClientPayload};
use crate::ui::messages::{header, info};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{color_for_arrival, paint};
use crate::utils::date::parse_date;
use crate::utils::formatting::format_percent;
use crate::utils::format_currency;
use crate::utils::table::Table;
use crate::utils::time::local_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Clients { action } = cmd else {
        return Ok(());
    };

    let (api, session) = connect_logged_in(cfg)?;

    match action {
        ClientAction::List => print_clients(&api.clients()?),

        ClientAction::Add { name, phone, email } => {
            require_admin(&session, "create clients")?;
            let payload = ClientPayload {
                name: valid_name(name)?,
                phone: phone.trim().to_string(),
                email: email.trim().to_string(),
            };
            save(&api, None, &payload)?;
        }

        ClientAction::Edit {
            id,
            name,
            phone,
            email,
        } => {
            require_admin(&session, "edit clients")?;
            let current = find_client(&api, id)?;
            let payload = ClientPayload {
                name: valid_name(name.as_deref().unwrap_or(&current.name))?,
                phone: phone.clone().unwrap_or(current.phone),
                email: email.clone().or(current.email).unwrap_or_default(),
            };
            save(&api, Some(&current.id), &payload)?;
        }

        ClientAction::Del { id, yes } => {
            require_admin(&session, "delete clients")?;
            let client = find_client(&api, id)?;
            let prompt = format!("Delete client '{}'? This action is irreversible.", client.name);
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
            api.delete_client(&client.id)?;
            after_mutation(&api, &DataEvent::Deleted(Entity::Client))?;
        }

        ClientAction::Stats { id } => {
            let stats = api.client_stats(id)?;
            header(format!("Statistics for {}", stats.client.name));
            println!("Total bookings   : {}", stats.total_bookings);
            println!("Arrived          : {}", stats.arrived_bookings);
            println!("Arrival rate     : {}", format_percent(stats.arrival_rate));
            println!("Total deposit    : {}", format_currency(stats.total_deposit));
            println!("Average deposit  : {}", format_currency(stats.avg_deposit));
            println!(
                "Last booking     : {}",
                stats
                    .last_booking
                    .as_deref()
                    .map(local_timestamp)
                    .unwrap_or_else(|| "-".to_string())
            );
        }

        ClientAction::Bookings {
            id,
            status,
            court,
            from,
            to,
        } => {
            let filter = BookingFilter {
                status: *status,
                court: court.clone(),
                from: from.as_deref().map(date_arg).transpose()?,
                to: to.as_deref().map(date_arg).transpose()?,
            };
            let bookings = api.client_bookings(id)?;
            print_bookings(&filter.apply(&bookings), bookings.len());
        }
    }

    Ok(())
}

/// Create when no id is given, update otherwise.
fn save(api: &ApiClient, id: Option<&str>, payload: &ClientPayload) -> AppResult<()> {
    let event = match id {
        Some(id) => {
            api.update_client(id, payload)?;
            DataEvent::Updated(Entity::Client)
        }
        None => {
            api.create_client(payload)?;
            DataEvent::Created(Entity::Client)
        }
    };
    after_mutation(api, &event)?;
    Ok(())
}

fn find_client(api: &ApiClient, id: &str) -> AppResult<Client> {
    api.clients()?
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::NotFound(format!("client '{id}'")))
}

fn valid_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("the client name cannot be empty".into()));
    }
    Ok(name.to_string())
}

fn date_arg(s: &str) -> AppResult<chrono::NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub(crate) fn print_clients(clients: &[Client]) {
    if clients.is_empty() {
        info("No clients found.");
        return;
    }

    let mut table = Table::auto(&["ID", "Name", "Phone", "Email"]);
    for c in clients {
        table.push_fit(vec![
            c.id.clone(),
            c.name.clone(),
            c.phone.clone(),
            c.email.clone().unwrap_or_default(),
        ]);
    }
    print!("{}", table.render());
}

fn print_bookings(bookings: &[&Booking], total: usize) {
    if bookings.is_empty() {
        info("No bookings match the filters.");
        return;
    }

    let mut table = Table::auto(&["Date", "Hour", "Court", "Deposit", "Status", "Permanent"]);
    for b in bookings {
        table.push_fit(vec![
            booking_day_key(&b.date).unwrap_or_else(|| b.date.clone()),
            b.time_slot.clone(),
            b.court.label().to_string(),
            format_currency(b.deposit),
            paint(b.status.label(), color_for_arrival(b.status)),
            if b.is_permanent { "yes" } else { "" }.to_string(),
        ]);
    }
    print!("{}", table.render());
    println!("{} of {} bookings", bookings.len(), total);
}
