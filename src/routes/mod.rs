//! Rotas HTTP
//!
//! Monta o router completo da API com CORS, timeout e tracing.

pub mod driver_routes;
pub mod editor_routes;
pub mod program_routes;
pub mod report_routes;
pub mod sync_routes;
pub mod vehicle_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::middleware::cors::cors_for;
use crate::state::AppState;

pub fn create_app_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_for(&state.config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(state.config.request_timeout));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/sync", sync_routes::create_sync_router())
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/programs", program_routes::create_program_router())
        .nest("/api/editor", editor_routes::create_editor_router())
        .nest("/api/reports", report_routes::create_report_router())
        .layer(middleware)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "dispatch_planner",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
