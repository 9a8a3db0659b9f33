use serde::{Deserialize, Serialize};

use crate::services::report_service::{ReportRow, ReportStats};

#[derive(Debug, Deserialize)]
pub struct DailyReportQuery {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyReportQuery {
    pub month: String,
}

// Estatísticas e linhas de um período
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub period: String,
    pub stats: ReportStats,
    pub rows: Vec<ReportRow>,
}
