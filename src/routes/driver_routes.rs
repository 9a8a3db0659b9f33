use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::common_dto::{ApiResponse, ConfirmQuery};
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id", delete(delete_driver))
}

async fn list_drivers(State(state): State<AppState>) -> Json<Vec<DriverResponse>> {
    Json(DriverController::new(&state).list().await)
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let response = DriverController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let response = DriverController::new(&state).delete(&id, query.confirm).await?;
    Ok(Json(response))
}
