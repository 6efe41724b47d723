use clap::ValueEnum;

use crate::api::ApiClient;
use crate::errors::AppResult;
use crate::models::{ClientReportRow, FinancialStats, PeriodKind};

/// Which server-rendered report to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Clients,
    Financial,
}

impl ReportKind {
    fn path(&self) -> &'static str {
        match self {
            ReportKind::Clients => "/stats/clients/export",
            ReportKind::Financial => "/stats/financial/export",
        }
    }

    pub fn default_file_name(&self, period: PeriodKind) -> String {
        match self {
            ReportKind::Clients => format!("clients_report_{}.xlsx", period.as_str()),
            ReportKind::Financial => format!("financial_report_{}.xlsx", period.as_str()),
        }
    }
}

fn period_query(period: PeriodKind) -> Vec<(&'static str, String)> {
    vec![("type", period.as_str().to_string())]
}

impl ApiClient {
    pub fn client_report(&self, period: PeriodKind) -> AppResult<Vec<ClientReportRow>> {
        self.get_json("/stats/clients", &period_query(period))
    }

    pub fn top_clients_by_bookings(&self, period: PeriodKind, limit: usize) -> AppResult<Vec<ClientReportRow>> {
        let mut query = period_query(period);
        query.push(("limit", limit.to_string()));
        self.get_json("/stats/clients/top-bookings", &query)
    }

    pub fn top_clients_by_attendance(&self, period: PeriodKind, limit: usize) -> AppResult<Vec<ClientReportRow>> {
        let mut query = period_query(period);
        query.push(("limit", limit.to_string()));
        self.get_json("/stats/clients/top-attendance", &query)
    }

    pub fn financial_report(&self, period: PeriodKind) -> AppResult<FinancialStats> {
        self.get_json("/stats/financial", &period_query(period))
    }

    /// Spreadsheet bytes rendered by the server.
    pub fn export_report(&self, kind: ReportKind, period: PeriodKind) -> AppResult<Vec<u8>> {
        self.get_bytes(kind.path(), &period_query(period))
    }
}
