pub mod arrival;
pub mod booking;
pub mod client;
pub mod court;
pub mod log_entry;
pub mod stats;
pub mod user;

pub use arrival::ArrivalStatus;
pub use booking::{Booking, BookingRequest, CourtRef};
pub use client::{Client, ClientPayload, ClientStats};
pub use court::{Court, CourtPayload, Pricing};
pub use log_entry::LogEntry;
pub use stats::{ClientReportRow, FinancialStats, PeriodKind};
pub use user::{Role, User, UserPayload};
