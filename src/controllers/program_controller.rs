use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dto::common_dto::ApiResponse;
use crate::dto::program_dto::{CreateProgramRequest, ProgramFilters, ProgramSummary};
use crate::models::DailyProgram;
use crate::state::{AppState, Session};
use crate::utils::errors::{not_found_error, validation_error, AppResult};
use crate::utils::validation::validate_date;

pub struct ProgramController {
    session: Arc<Mutex<Session>>,
}

impl ProgramController {
    pub fn new(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
        }
    }

    pub async fn list(&self, filters: ProgramFilters) -> AppResult<Vec<ProgramSummary>> {
        let date = match filters.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_date(raw)?),
            _ => None,
        };

        let session = self.session.lock().await;
        let programs = session.catalog.programs();
        Ok(programs
            .iter()
            .filter(|p| date.map_or(true, |d| p.date == d))
            .map(ProgramSummary::from)
            .collect())
    }

    /// Cria a programação e já a abre no editor
    pub async fn create(
        &self,
        request: CreateProgramRequest,
    ) -> AppResult<ApiResponse<DailyProgram>> {
        let date = parse_date(request.date.trim())?;

        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        let program = editor.create_program(catalog, date).await?;

        Ok(ApiResponse::success_with_message(
            program,
            "Programação criada com sucesso".to_string(),
        ))
    }

    pub async fn get(&self, id: &str) -> AppResult<DailyProgram> {
        let session = self.session.lock().await;
        session
            .catalog
            .find_program(id)
            .cloned()
            .ok_or_else(|| not_found_error("Programação", id))
    }

    pub async fn delete(&self, id: &str, confirmed: bool) -> AppResult<ApiResponse<String>> {
        let mut guard = self.session.lock().await;
        let Session { catalog, editor } = &mut *guard;
        editor.delete_program(catalog, id, confirmed).await?;

        Ok(ApiResponse::success_with_message(
            id.to_string(),
            "Programação excluída com sucesso".to_string(),
        ))
    }
}

fn parse_date(raw: &str) -> AppResult<chrono::NaiveDate> {
    validate_date(raw).map_err(|_| validation_error("date", "Data inválida, use AAAA-MM-DD"))
}
