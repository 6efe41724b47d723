use crate::api::ApiClient;
use crate::core::events::{DataEvent, RefreshTarget};
use crate::core::week::WeekCursor;
use crate::errors::AppResult;
use crate::models::{Booking, Client, Court, User};

/// Data fetched again after a mutation.
#[derive(Debug, Clone)]
pub enum Refreshed {
    Week {
        court_id: String,
        week: WeekCursor,
        bookings: Vec<Booking>,
    },
    Courts(Vec<Court>),
    Clients(Vec<Client>),
    Users(Vec<User>),
}

impl ApiClient {
    /// Refetch exactly what `target` covers; a booking change reloads only its week.
    pub fn refresh(&self, target: &RefreshTarget) -> AppResult<Refreshed> {
        Ok(match target {
            RefreshTarget::BookingWeek { court_id, week } => Refreshed::Week {
                court_id: court_id.clone(),
                week: *week,
                bookings: self.bookings_for_week(court_id, week)?,
            },
            RefreshTarget::Courts => Refreshed::Courts(self.courts()?),
            RefreshTarget::Clients => Refreshed::Clients(self.clients()?),
            RefreshTarget::Users => Refreshed::Users(self.users()?),
        })
    }

    pub fn refresh_after(&self, event: &DataEvent) -> AppResult<Refreshed> {
        tracing::debug!(%event, "refreshing after mutation");
        self.refresh(&event.refresh_target())
    }
}
