use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::program_controller::ProgramController;
use crate::dto::common_dto::{ApiResponse, ConfirmQuery};
use crate::dto::program_dto::{CreateProgramRequest, ProgramFilters, ProgramSummary};
use crate::models::DailyProgram;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_program_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_programs).post(create_program))
        .route("/:id", get(get_program).delete(delete_program))
}

async fn list_programs(
    State(state): State<AppState>,
    Query(filters): Query<ProgramFilters>,
) -> Result<Json<Vec<ProgramSummary>>, AppError> {
    let response = ProgramController::new(&state).list(filters).await?;
    Ok(Json(response))
}

async fn create_program(
    State(state): State<AppState>,
    Json(request): Json<CreateProgramRequest>,
) -> Result<Json<ApiResponse<DailyProgram>>, AppError> {
    let response = ProgramController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DailyProgram>, AppError> {
    let response = ProgramController::new(&state).get(&id).await?;
    Ok(Json(response))
}

async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let response = ProgramController::new(&state).delete(&id, query.confirm).await?;
    Ok(Json(response))
}
