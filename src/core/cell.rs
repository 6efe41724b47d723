//! Rules for editing a single grid cell.
//!
//! A past cell accepts no new booking from a regular user, and only admins
//! may change, delete or make permanent an existing booking.

use crate::core::client_choice::ClientChoice;
use crate::core::grid::GridCell;
use crate::core::slots::day_key;
use crate::errors::{AppError, AppResult};
use crate::models::{ArrivalStatus, Booking, BookingRequest, Role};

/// Actions a cell currently allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPolicy {
    pub can_create: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub can_toggle_permanent: bool,
    pub can_set_arrival: bool,
}

impl CellPolicy {
    pub fn evaluate(booking: Option<&Booking>, past: bool, role: Role) -> Self {
        let admin = role.is_admin();
        let booked = booking.is_some();

        Self {
            can_create: !booked && !past,
            can_update: booked && admin,
            can_delete: booked && admin && !past,
            can_toggle_permanent: booked && admin && !past,
            can_set_arrival: admin && (booked || !past),
        }
    }

    pub fn for_cell(cell: &GridCell, role: Role) -> Self {
        Self::evaluate(cell.booking.as_ref(), cell.past, role)
    }
}

/// User input for a cell. Unset fields keep the existing booking's values.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub client: ClientChoice,
    pub deposit: Option<f64>,
    pub deposit_note: Option<String>,
    pub arrived: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction {
    Create(BookingRequest),
    Update { id: String, request: BookingRequest },
}

impl SaveAction {
    pub fn request(&self) -> &BookingRequest {
        match self {
            SaveAction::Create(r) => r,
            SaveAction::Update { request, .. } => request,
        }
    }
}

/// Turn a draft into the create-or-update request for `cell`.
pub fn plan_save(draft: &BookingDraft, cell: &GridCell, court_id: &str, role: Role) -> AppResult<SaveAction> {
    let policy = CellPolicy::for_cell(cell, role);
    let existing = cell.booking.as_ref();

    let deposit = draft
        .deposit
        .or(existing.map(|b| b.deposit))
        .unwrap_or(0.0);
    if deposit < 0.0 || !deposit.is_finite() {
        return Err(AppError::Validation(
            "the deposit cannot be a negative number".into(),
        ));
    }

    let client_name = draft.client.name().trim().to_string();
    if client_name.is_empty() {
        return Err(AppError::Validation("a client name is required".into()));
    }

    match existing {
        Some(_) if !policy.can_update => {
            return Err(AppError::Forbidden(
                "only admins can change an existing booking".into(),
            ));
        }
        None if !policy.can_create => {
            return Err(AppError::Forbidden(format!(
                "the {} {} slot is in the past",
                day_key(cell.day),
                cell.hour
            )));
        }
        _ => {}
    }

    let arrived = draft
        .arrived
        .or(existing.map(|b| b.status.is_arrived()))
        .unwrap_or(false);

    // Regular users cannot mark arrivals.
    let status = if role.is_admin() {
        ArrivalStatus::from_flag(arrived)
    } else {
        ArrivalStatus::NotArrived
    };

    let deposit_note = draft
        .deposit_note
        .clone()
        .or_else(|| existing.and_then(|b| b.deposit_note.clone()));

    let client = draft
        .client
        .client_id()
        .map(str::to_string)
        .or_else(|| {
            existing
                .filter(|b| b.client_name == client_name)
                .and_then(|b| b.client.clone())
        });

    let request = BookingRequest {
        court: court_id.to_string(),
        date: day_key(cell.day),
        time_slot: cell.hour.clone(),
        client_name,
        client,
        deposit,
        deposit_note,
        status,
    };

    match existing {
        Some(b) => {
            if !is_dirty(b, &request) {
                return Err(AppError::Validation("nothing changed in this booking".into()));
            }
            Ok(SaveAction::Update {
                id: b.id.clone(),
                request,
            })
        }
        None => Ok(SaveAction::Create(request)),
    }
}

fn is_dirty(existing: &Booking, request: &BookingRequest) -> bool {
    existing.client_name != request.client_name
        || existing.deposit != request.deposit
        || existing.status != request.status
        || existing.deposit_note != request.deposit_note
        || (request.client.is_some() && existing.client != request.client)
}

/// Booking to delete, if the actor may delete it.
pub fn check_delete(cell: &GridCell, role: Role) -> AppResult<&Booking> {
    let booking = cell
        .booking
        .as_ref()
        .ok_or_else(|| AppError::NotFound(format!("no booking at {} {}", day_key(cell.day), cell.hour)))?;

    if !CellPolicy::for_cell(cell, role).can_delete {
        return Err(AppError::Forbidden(if role.is_admin() {
            "past bookings cannot be deleted".into()
        } else {
            "only admins can delete bookings".into()
        }));
    }

    Ok(booking)
}

/// Booking to toggle and its new permanent flag.
pub fn check_toggle_permanent(cell: &GridCell, role: Role) -> AppResult<(&Booking, bool)> {
    let booking = cell
        .booking
        .as_ref()
        .ok_or_else(|| AppError::NotFound(format!("no booking at {} {}", day_key(cell.day), cell.hour)))?;

    if !CellPolicy::for_cell(cell, role).can_toggle_permanent {
        return Err(AppError::Forbidden(if role.is_admin() {
            "past bookings cannot change their recurrence".into()
        } else {
            "only admins can make a booking permanent".into()
        }));
    }

    Ok((booking, !booking.is_permanent))
}
