use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dto::report_dto::ReportResponse;
use crate::services::report_service::{programs_in, rows_for, stats, ReportPeriod};
use crate::services::spreadsheet_export::{build_workbook, SpreadsheetFile};
use crate::state::{AppState, Session};
use crate::utils::errors::{AppError, AppResult};

pub struct ReportController {
    session: Arc<Mutex<Session>>,
}

impl ReportController {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }

    /// Estatísticas e linhas do período; período vazio não é erro aqui
    pub async fn report(&self, period: ReportPeriod, label: &str) -> ReportResponse {
        let session = self.session.lock().await;
        let programs = session.catalog.programs();

        ReportResponse {
            period: label.to_string(),
            stats: stats(programs_in(programs, &period)),
            rows: rows_for(programs, &period),
        }
    }

    /// Planilha do período, ou `NoData` quando nada casa com o filtro
    pub async fn export(&self, period: ReportPeriod) -> AppResult<SpreadsheetFile> {
        let rows = {
            let session = self.session.lock().await;
            rows_for(session.catalog.programs(), &period)
        };

        if rows.is_empty() {
            return Err(AppError::NoData(period.empty_message().to_string()));
        }

        let bytes = build_workbook(period.sheet_name(), &rows)?;
        tracing::info!("📊 Planilha {} gerada com {} linhas", period.file_name(), rows.len());

        Ok(SpreadsheetFile {
            file_name: period.file_name(),
            bytes,
        })
    }
}
