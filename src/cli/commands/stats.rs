use crate::cli::commands::{connect_logged_in, require_admin};
use crate::cli::parser::{ClientView, Commands, StatsAction};
use crate::config::Config;
use crate::core::reports::{ClientRanking, TOP_CLIENTS, paginate, top_clients};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::{ClientReportRow, FinancialStats, PeriodKind};
use crate::ui::messages::{header, info};
use crate::utils::format_currency;
use crate::utils::formatting::format_percent;
use crate::utils::path::resolve_output;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stats { action } = cmd else {
        return Ok(());
    };

    let (api, session) = connect_logged_in(cfg)?;
    require_admin(&session, "read reports")?;

    match action {
        StatsAction::Clients {
            period,
            view,
            page,
            per_page,
        } => {
            let rows = api.client_report(*period)?;

            match view {
                ClientView::All => {
                    let page = paginate(&rows, *page, per_page.unwrap_or(cfg.rows_per_page));
                    header(format!("Clients ({})", period_title(*period)));
                    print_client_rows(&page.items);
                    if page.total > 0 {
                        println!("{} (page {} of {})", page.range_label(), page.page, page.pages());
                    }
                }
                ClientView::TopBookings => {
                    header(format!("Top {TOP_CLIENTS} clients by bookings ({})", period_title(*period)));
                    print_client_rows(&top_clients(&rows, ClientRanking::Bookings, TOP_CLIENTS));
                }
                ClientView::TopAttendance => {
                    header(format!("Top {TOP_CLIENTS} clients by attendance ({})", period_title(*period)));
                    print_client_rows(&top_clients(&rows, ClientRanking::Attendance, TOP_CLIENTS));
                }
            }
        }

        StatsAction::Financial { period } => {
            let stats = api.financial_report(*period)?;
            header(format!("Income ({})", period_title(*period)));
            print_financial(&stats);
        }

        StatsAction::Export {
            kind,
            period,
            file,
            force,
        } => {
            let path = resolve_output(
                file.as_deref(),
                cfg.export_dir.as_deref(),
                &kind.default_file_name(*period),
            );
            let bytes = api.export_report(*kind, *period)?;
            ExportLogic::save_report(&bytes, &path, *force)?;
        }
    }

    Ok(())
}

fn period_title(period: PeriodKind) -> &'static str {
    match period {
        PeriodKind::Week => "this week",
        PeriodKind::Month => "this month",
        PeriodKind::Year => "this year",
    }
}

fn print_client_rows(rows: &[ClientReportRow]) {
    if rows.is_empty() {
        info("No client activity in this period.");
        return;
    }

    let mut table = Table::auto(&["Name", "Email", "Phone", "Bookings", "Attended", "Rate"]);
    for r in rows {
        table.push_fit(vec![
            r.name.clone(),
            r.email.clone(),
            r.phone.clone(),
            r.bookings_count.to_string(),
            r.attendance_count.to_string(),
            format_percent(r.attendance_rate),
        ]);
    }
    print!("{}", table.render());
}

fn print_financial(stats: &FinancialStats) {
    println!("Total income: {}\n", format_currency(stats.total_income));

    if !stats.by_period.is_empty() {
        let mut table = Table::auto(&["Date", "Income"]);
        for p in &stats.by_period {
            table.push_fit(vec![p.date.clone(), format_currency(p.income)]);
        }
        print!("{}", table.render());
        println!();
    }

    if !stats.by_court.is_empty() {
        let mut table = Table::auto(&["Court", "Income"]);
        for c in &stats.by_court {
            table.push_fit(vec![c.court_name.clone(), format_currency(c.income)]);
        }
        print!("{}", table.render());
        println!();
    }

    if !stats.by_schedule.is_empty() {
        let mut table = Table::auto(&["Hour", "Income"]);
        for s in &stats.by_schedule {
            table.push_fit(vec![format!("{}:00", s.hour), format_currency(s.income)]);
        }
        print!("{}", table.render());
    }
}
