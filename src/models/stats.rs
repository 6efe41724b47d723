use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Period granularity accepted by the stats endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Week,
    Month,
    Year,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Year => "year",
        }
    }
}

/// One row of `GET /stats/clients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientReportRow {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub bookings_count: u32,
    pub attendance_count: u32,
    /// 0..1
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeByPeriod {
    pub date: String,
    pub income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeByCourt {
    pub court_id: String,
    pub court_name: String,
    pub income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeBySchedule {
    pub hour: u32,
    pub income: f64,
}

/// Response of `GET /stats/financial`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStats {
    pub total_income: f64,
    #[serde(default)]
    pub by_period: Vec<IncomeByPeriod>,
    #[serde(default)]
    pub by_court: Vec<IncomeByCourt>,
    #[serde(default)]
    pub by_schedule: Vec<IncomeBySchedule>,
}
