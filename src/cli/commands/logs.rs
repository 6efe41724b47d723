use ansi_term::Colour;

use crate::cli::commands::{connect_logged_in, require_admin};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reports::LogFilter;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::table::{Table, truncate};
use crate::utils::time::local_timestamp;

const ACTION_WIDTH: usize = 60;

/// Color by the verb the backend puts at the start of the action text.
fn color_for_action(action: &str) -> Colour {
    let lower = action.to_lowercase();
    if lower.contains("elimin") || lower.contains("delet") {
        Colour::Red
    } else if lower.contains("cre") {
        Colour::Green
    } else if lower.contains("actualiz") || lower.contains("updat") {
        Colour::Yellow
    } else if lower.contains("login") || lower.contains("sesi") {
        Colour::Blue
    } else {
        Colour::White
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { date, user, time } = cmd {
        let filter = LogFilter {
            date: date
                .as_deref()
                .map(|d| parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string())))
                .transpose()?,
            user: user.clone(),
            time: time.clone(),
        };

        let (api, session) = connect_logged_in(cfg)?;
        require_admin(&session, "read the activity log")?;

        let entries = api.logs()?;
        print_logs(&filter.apply(&entries), entries.len());
    }
    Ok(())
}

fn print_logs(entries: &[&LogEntry], total: usize) {
    if entries.is_empty() {
        info("No log entries match the filters.");
        return;
    }

    let mut table = Table::auto(&["Date", "User", "Action"]);
    for e in entries {
        let action = truncate(&e.action, ACTION_WIDTH);
        table.push_fit(vec![
            local_timestamp(&e.created_at),
            e.user.clone(),
            color_for_action(&e.action).paint(action).to_string(),
        ]);
    }
    print!("{}", table.render());
    println!("{} of {} entries", entries.len(), total);
}
