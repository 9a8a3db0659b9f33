use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use dispatch_planner::config::environment::{EnvironmentConfig, StorageBackend};
use dispatch_planner::create_app_router;
use dispatch_planner::repositories::MemoryDocumentStore;
use dispatch_planner::state::AppState;

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    bytes: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }
}

struct TestApp {
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let config = EnvironmentConfig {
            storage_backend: StorageBackend::Memory,
            ..EnvironmentConfig::default()
        };
        let state = AppState::new(config, Arc::new(MemoryDocumentStore::new()));
        state.reload().await;
        Self {
            router: create_app_router(state),
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse {
            status,
            headers,
            bytes,
        }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Cadastra um motorista e um veículo e devolve (driverId, vehicleId)
    async fn seed_fleet(&self) -> (String, String) {
        let driver = self
            .post("/api/drivers", json!({ "name": "Carlos", "phone": "11 99999-0000" }))
            .await
            .json();
        let vehicle = self
            .post("/api/vehicles", json!({ "plate": "abc1234", "model": "Accelo" }))
            .await
            .json();
        (
            driver["data"]["id"].as_str().unwrap().to_string(),
            vehicle["data"]["id"].as_str().unwrap().to_string(),
        )
    }
}

fn route_body(driver_id: &str, vehicle_id: &str, destinations: Value) -> Value {
    json!({
        "driverId": driver_id,
        "vehicleId": vehicle_id,
        "departureCity": "São Paulo",
        "departureTime": "06:00",
        "destinations": destinations,
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}

#[tokio::test]
async fn test_vehicle_plate_is_uppercased_and_sorted() {
    let app = TestApp::new().await;
    app.post("/api/vehicles", json!({ "plate": " xyz9000 " })).await;
    let created = app.post("/api/vehicles", json!({ "plate": "abc1234" })).await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json()["data"]["plate"], "ABC1234");

    let list = app.get("/api/vehicles").await.json();
    let plates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["plate"].as_str().unwrap())
        .collect();
    assert_eq!(plates, vec!["ABC1234", "XYZ9000"]);
}

#[tokio::test]
async fn test_driver_requires_name() {
    let app = TestApp::new().await;
    let response = app.post("/api/drivers", json!({ "name": "   " })).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], "VALIDATION_ERROR");
    assert!(app.get("/api/drivers").await.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let app = TestApp::new().await;
    let (driver_id, _) = app.seed_fleet().await;

    let refused = app.delete(&format!("/api/drivers/{}", driver_id)).await;
    assert_eq!(refused.status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(app.get("/api/drivers").await.json().as_array().unwrap().len(), 1);

    let accepted = app
        .delete(&format!("/api/drivers/{}?confirm=true", driver_id))
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert!(app.get("/api/drivers").await.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_program_flow_generates_message() {
    let app = TestApp::new().await;
    let (driver_id, vehicle_id) = app.seed_fleet().await;

    let created = app.post("/api/programs", json!({ "date": "2025-03-10" })).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.json()["data"]["sequence"], 1);

    let saved = app
        .post(
            "/api/editor/routes",
            route_body(
                &driver_id,
                &vehicle_id,
                json!([{ "city": "Campinas", "time": "08:00" }]),
            ),
        )
        .await;
    assert_eq!(saved.status, StatusCode::OK);

    let message = saved.json()["data"]["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("📌 PROGRAMAÇÃO DIÁRIA 1"));
    assert!(message.contains("🚚 VEÍCULO 1  - ABC1234"));
    assert!(message.contains("👤 Motorista: Carlos"));
    assert!(message.contains("📍 Partida: São Paulo às 06:00"));
    assert!(message.contains("🛣️ Destino 1: Campinas às 08:00"));

    let links = app.get("/api/editor/dispatch").await.json();
    assert!(links["appUrl"].as_str().unwrap().starts_with("https://wa.me/?text="));
    assert_eq!(links["text"], message.as_str());
}

#[tokio::test]
async fn test_same_date_programs_get_sequential_numbers() {
    let app = TestApp::new().await;
    app.post("/api/programs", json!({ "date": "2025-03-10" })).await;
    let second = app.post("/api/programs", json!({ "date": "2025-03-10" })).await.json();
    let other = app.post("/api/programs", json!({ "date": "2025-03-11" })).await.json();

    assert_eq!(second["data"]["sequence"], 2);
    assert_eq!(other["data"]["sequence"], 1);

    let filtered = app.get("/api/programs?date=2025-03-10").await.json();
    assert_eq!(filtered.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_blank_destinations_are_dropped() {
    let app = TestApp::new().await;
    let (driver_id, vehicle_id) = app.seed_fleet().await;
    app.post("/api/programs", json!({ "date": "2025-03-10" })).await;

    let saved = app
        .post(
            "/api/editor/routes",
            route_body(
                &driver_id,
                &vehicle_id,
                json!([{ "city": "X" }, { "city": "" }, { "city": "Y" }]),
            ),
        )
        .await
        .json();

    let cities: Vec<&str> = saved["data"]["routes"][0]["destinations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, vec!["X", "Y"]);
}

#[tokio::test]
async fn test_route_without_active_program_is_conflict() {
    let app = TestApp::new().await;
    let (driver_id, vehicle_id) = app.seed_fleet().await;

    let response = app
        .post(
            "/api/editor/routes",
            route_body(&driver_id, &vehicle_id, json!([{ "city": "Campinas" }])),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_route_missing_fields_is_validation_error() {
    let app = TestApp::new().await;
    app.post("/api/programs", json!({ "date": "2025-03-10" })).await;

    let response = app
        .post("/api/editor/routes", json!({ "destinations": [{ "city": "Campinas" }] }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let editor = app.get("/api/editor").await.json();
    assert!(editor["activeProgram"]["routes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_daily_report_and_export() {
    let app = TestApp::new().await;
    let (driver_id, vehicle_id) = app.seed_fleet().await;
    app.post("/api/programs", json!({ "date": "2025-03-10" })).await;
    app.post(
        "/api/editor/routes",
        route_body(
            &driver_id,
            &vehicle_id,
            json!([{ "city": "Campinas", "time": "08:00" }, { "city": "Jundiaí" }]),
        ),
    )
    .await;

    let report = app.get("/api/reports/daily?date=2025-03-10").await.json();
    assert_eq!(report["stats"]["programCount"], 1);
    assert_eq!(report["stats"]["routeCount"], 1);
    assert_eq!(report["stats"]["destinationCount"], 2);
    assert_eq!(report["rows"][0]["date"], "10/03/2025");
    assert_eq!(report["rows"][1]["destinationTime"], "");

    let export = app.get("/api/reports/daily/export?date=2025-03-10").await;
    assert_eq!(export.status, StatusCode::OK);
    assert!(export.headers[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("programacoes_10-03-2025.xlsx"));
    assert!(export.bytes.starts_with(b"PK"));

    let monthly = app.get("/api/reports/monthly?month=2025-03").await.json();
    assert_eq!(monthly["rows"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_export_without_data_signals_no_data() {
    let app = TestApp::new().await;

    let response = app.get("/api/reports/daily/export?date=2025-03-11").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], "NO_DATA");
    assert_eq!(
        response.json()["message"],
        "Nenhuma programação encontrada para esta data"
    );

    let monthly = app.get("/api/reports/monthly/export?month=2025-04").await;
    assert_eq!(monthly.json()["message"], "Nenhuma programação encontrada para este mês");
}

#[tokio::test]
async fn test_invalid_report_date() {
    let app = TestApp::new().await;
    let response = app.get("/api/reports/daily?date=10/03/2025").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sync_reports_every_collection() {
    let app = TestApp::new().await;
    let response = app.post("/api/sync", json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["drivers"]["status"], "loaded");
    assert_eq!(body["data"]["programs"]["status"], "loaded");
}

#[tokio::test]
async fn test_sync_keeps_open_route_form() {
    let app = TestApp::new().await;
    let (driver_id, vehicle_id) = app.seed_fleet().await;
    app.post("/api/programs", json!({ "date": "2025-03-10" })).await;

    let mut body = route_body(&driver_id, &vehicle_id, json!([{ "city": "Campinas" }]));
    body["routeId"] = json!("");
    let saved = app.post("/api/editor/routes", body).await;
    assert_eq!(saved.status, StatusCode::OK);

    app.post("/api/editor/routes/new", json!({})).await;
    app.post("/api/sync", json!({})).await;

    let editor = app.get("/api/editor").await.json();
    assert_eq!(editor["routeEdit"]["mode"], "creating");
    assert_eq!(editor["activeProgram"]["routes"].as_array().unwrap().len(), 1);
}
