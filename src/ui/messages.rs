//! One-line user feedback. Everything but errors goes to stdout.

use std::fmt;

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, "ℹ️", msg));
}

/// Operation feedback, e.g. "Booking created successfully".
pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, "❌", msg));
}

/// Title printed above tables and grids.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}== {msg} =={RESET}");
}
