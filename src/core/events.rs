//! Mutation events and the data they invalidate.
//!
//! Every successful create/update/delete produces a [`DataEvent`]; the data
//! loader turns its [`RefreshTarget`] into exactly one refetch.

use std::fmt;

use chrono::NaiveDate;

use crate::core::week::WeekCursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// A booking on `court_id` for the business day `day`.
    Booking { court_id: String, day: NaiveDate },
    Court,
    Client,
    User,
}

impl Entity {
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Booking { .. } => "Booking",
            Entity::Court => "Court",
            Entity::Client => "Client",
            Entity::User => "User",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataEvent {
    Created(Entity),
    Updated(Entity),
    Deleted(Entity),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshTarget {
    /// Only the displayed week of one court.
    BookingWeek { court_id: String, week: WeekCursor },
    Courts,
    Clients,
    Users,
}

impl DataEvent {
    pub fn entity(&self) -> &Entity {
        match self {
            DataEvent::Created(e) | DataEvent::Updated(e) | DataEvent::Deleted(e) => e,
        }
    }

    pub fn refresh_target(&self) -> RefreshTarget {
        match self.entity() {
            Entity::Booking { court_id, day } => RefreshTarget::BookingWeek {
                court_id: court_id.clone(),
                week: WeekCursor::new(*day),
            },
            Entity::Court => RefreshTarget::Courts,
            Entity::Client => RefreshTarget::Clients,
            Entity::User => RefreshTarget::Users,
        }
    }
}

impl fmt::Display for DataEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            DataEvent::Created(_) => "created",
            DataEvent::Updated(_) => "updated",
            DataEvent::Deleted(_) => "deleted",
        };
        write!(f, "{} {} successfully", self.entity().name(), verb)
    }
}
