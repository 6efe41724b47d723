//! Money and percentage formatting for tables and reports.

/// Quetzales with thousands separators, e.g. `Q1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{sign}Q{grouped}.{frac:02}")
}

/// Attendance rate (0..=1) as a percentage, e.g. "87.5%".
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
