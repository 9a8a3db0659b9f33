use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::editor_controller::EditorController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::program_dto::{EditorResponse, RouteDraftResponse, RouteForm, UpdateMessageRequest};
use crate::models::DailyProgram;
use crate::services::dispatch_links::DispatchLinks;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_editor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_editor))
        .route("/open/:id", post(open_program))
        .route("/close", post(close_program))
        .route("/routes", post(submit_route))
        .route("/routes/new", post(begin_route))
        .route("/routes/cancel", post(cancel_route))
        .route("/routes/:id/edit", post(begin_route_edit))
        .route("/routes/:id", delete(remove_route))
        .route("/message", put(update_message))
        .route("/dispatch", get(dispatch_links))
}

async fn get_editor(State(state): State<AppState>) -> Json<EditorResponse> {
    Json(EditorController::new(&state).view().await)
}

async fn open_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EditorResponse>, AppError> {
    let response = EditorController::new(&state).open(&id).await?;
    Ok(Json(response))
}

async fn close_program(State(state): State<AppState>) -> Json<EditorResponse> {
    Json(EditorController::new(&state).close().await)
}

async fn begin_route(State(state): State<AppState>) -> Result<Json<EditorResponse>, AppError> {
    let response = EditorController::new(&state).begin_route().await?;
    Ok(Json(response))
}

async fn begin_route_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteDraftResponse>, AppError> {
    let response = EditorController::new(&state).begin_route_edit(&id).await?;
    Ok(Json(response))
}

async fn cancel_route(State(state): State<AppState>) -> Json<EditorResponse> {
    Json(EditorController::new(&state).cancel_route().await)
}

async fn submit_route(
    State(state): State<AppState>,
    Json(form): Json<RouteForm>,
) -> Result<Json<ApiResponse<DailyProgram>>, AppError> {
    let response = EditorController::new(&state).submit_route(form).await?;
    Ok(Json(response))
}

async fn remove_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DailyProgram>>, AppError> {
    let response = EditorController::new(&state).remove_route(&id).await?;
    Ok(Json(response))
}

async fn update_message(
    State(state): State<AppState>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Json<ApiResponse<DailyProgram>>, AppError> {
    let response = EditorController::new(&state)
        .update_message(request.message)
        .await?;
    Ok(Json(response))
}

async fn dispatch_links(State(state): State<AppState>) -> Result<Json<DispatchLinks>, AppError> {
    let response = EditorController::new(&state).dispatch().await?;
    Ok(Json(response))
}
