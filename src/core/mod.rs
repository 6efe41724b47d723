pub mod cell;
pub mod client_choice;
pub mod config;
pub mod events;
pub mod grid;
pub mod reports;
pub mod session;
pub mod slots;
pub mod week;
