//! Interactive prompts. Everything here reads a single line from stdin.

use std::io::{self, Write};

use crate::ui::messages::warning;

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    matches!(read_answer("Confirm [y/N]: ").as_deref(), Some("y" | "yes"))
}

/// Yes/no question without the warning banner.
pub fn ask_yes_no(question: &str) -> bool {
    matches!(
        read_answer(&format!("{question} [y/N]: ")).as_deref(),
        Some("y" | "yes")
    )
}

fn read_answer(label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut s = String::new();
    match io::stdin().read_line(&mut s) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(s.trim().to_lowercase()),
    }
}

/// Read a line for a secret; returns the trimmed text (may be empty).
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim_end_matches(['\r', '\n']).to_string())
}
