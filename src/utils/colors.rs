//! ANSI colors for terminal output, plus court color parsing.
use regex::Regex;
use std::sync::OnceLock;

use crate::models::ArrivalStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Green for arrived, red for no-show.
pub fn color_for_arrival(status: ArrivalStatus) -> &'static str {
    match status {
        ArrivalStatus::Arrived => GREEN,
        ArrivalStatus::NotArrived => RED,
    }
}

pub fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").expect("valid regex"))
}

/// "#1a2B3c" or "1a2B3c" → (0x1a, 0x2b, 0x3c)
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let caps = hex_re().captures(s.trim())?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

/// Canonical "#RRGGBB" form of a court color.
pub fn normalize_hex(s: &str) -> Option<String> {
    parse_hex_color(s).map(|(r, g, b)| format!("#{:02X}{:02X}{:02X}", r, g, b))
}

pub fn rgb_value(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Black text on bright backgrounds, white on dark ones (perceived brightness).
pub fn font_for_background(r: u8, g: u8, b: u8) -> u32 {
    let brightness = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
    if brightness > 128 { 0x000000 } else { 0xFFFFFF }
}
