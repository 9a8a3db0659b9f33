use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common_dto::{ApiResponse, ConfirmQuery};
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", delete(delete_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<Vec<VehicleResponse>> {
    Json(VehicleController::new(&state).list().await)
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let response = VehicleController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<ApiResponse<String>>, AppError> {
    let response = VehicleController::new(&state).delete(&id, query.confirm).await?;
    Ok(Json(response))
}
