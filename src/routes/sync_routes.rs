use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::sync_controller::SyncController;
use crate::dto::common_dto::ApiResponse;
use crate::services::SyncReport;
use crate::state::AppState;

pub fn create_sync_router() -> Router<AppState> {
    Router::new().route("/", post(sync))
}

async fn sync(State(state): State<AppState>) -> Json<ApiResponse<SyncReport>> {
    let report = SyncController::new(&state).sync().await;
    let message = if report.is_complete() {
        "Dados sincronizados".to_string()
    } else {
        "Sincronização parcial: alguma coleção não pôde ser carregada".to_string()
    };
    Json(ApiResponse::success_with_message(report, message))
}
