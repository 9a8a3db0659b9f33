use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dispatch_planner::dto::program_dto::{DestinationForm, RouteForm};
use dispatch_planner::models::{Collection, NewDriver, NewVehicle};
use dispatch_planner::repositories::document_store::{
    CreatedDocument, DocumentStore, StoreError, StoreResult, StoredDocument,
};
use dispatch_planner::repositories::MemoryDocumentStore;
use dispatch_planner::services::{Catalog, ProgramEditor, ReadOutcome, RouteEditMode};
use dispatch_planner::utils::errors::AppError;

/// Banco em memória que pode ser "derrubado" no meio do teste
#[derive(Default)]
struct FlakyStore {
    inner: MemoryDocumentStore,
    fail_writes: AtomicBool,
    fail_lists: AtomicBool,
}

impl FlakyStore {
    fn check(flag: &AtomicBool) -> StoreResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("conexão recusada".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn create(&self, collection: Collection, data: Value) -> StoreResult<CreatedDocument> {
        Self::check(&self.fail_writes)?;
        self.inner.create(collection, data).await
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<StoredDocument>> {
        Self::check(&self.fail_lists)?;
        self.inner.list(collection).await
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()> {
        Self::check(&self.fail_writes)?;
        self.inner.update(collection, id, patch).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        Self::check(&self.fail_writes)?;
        self.inner.delete(collection, id).await
    }
}

struct Harness {
    store: Arc<FlakyStore>,
    catalog: Catalog,
    editor: ProgramEditor,
    driver_id: String,
    vehicle_id: String,
}

impl Harness {
    async fn new() -> Self {
        let store = Arc::new(FlakyStore::default());
        let shared: Arc<dyn DocumentStore> = store.clone();

        let mut catalog = Catalog::new(shared.clone());
        let driver = catalog
            .register_driver(NewDriver::new("Carlos", None).unwrap())
            .await
            .unwrap();
        let vehicle = catalog
            .register_vehicle(NewVehicle::new("ABC1234", None).unwrap())
            .await
            .unwrap();

        Self {
            store,
            catalog,
            editor: ProgramEditor::new(shared),
            driver_id: driver.id,
            vehicle_id: vehicle.id,
        }
    }

    fn route(&self, cities: &[&str]) -> RouteForm {
        RouteForm {
            route_id: None,
            driver_id: self.driver_id.clone(),
            vehicle_id: self.vehicle_id.clone(),
            departure_city: "São Paulo".to_string(),
            departure_time: "06:00".to_string(),
            destinations: cities.iter().map(|c| DestinationForm::city(c)).collect(),
        }
    }

    fn set_writes_failing(&self, failing: bool) {
        self.store.fail_writes.store(failing, Ordering::SeqCst);
    }
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

#[tokio::test]
async fn test_failed_create_keeps_previous_state() {
    let mut h = Harness::new().await;
    h.set_writes_failing(true);

    let err = h.editor.create_program(&mut h.catalog, march(10)).await.unwrap_err();
    assert_eq!(err.to_string(), "Erro ao criar programação. Tente novamente.");
    assert!(h.editor.active().is_none());
    assert!(h.catalog.programs().is_empty());
}

#[tokio::test]
async fn test_failed_submit_leaves_program_and_form_untouched() {
    let mut h = Harness::new().await;
    h.editor.create_program(&mut h.catalog, march(10)).await.unwrap();
    h.editor.begin_route().unwrap();

    h.set_writes_failing(true);
    let form = h.route(&["Campinas"]);
    let err = h.editor.submit_route(&mut h.catalog, form).await.unwrap_err();

    assert!(matches!(err, AppError::Persistence { action: "salvar roteiro", .. }));
    assert!(h.editor.active().unwrap().routes.is_empty());
    assert_eq!(h.editor.active().unwrap().message, "");
    assert_eq!(h.editor.route_edit(), &RouteEditMode::Creating);

    // Nova tentativa depois que o banco volta
    h.set_writes_failing(false);
    let form = h.route(&["Campinas"]);
    let program = h.editor.submit_route(&mut h.catalog, form).await.unwrap();
    assert_eq!(program.routes.len(), 1);
    assert_eq!(h.editor.route_edit(), &RouteEditMode::Closed);
}

#[tokio::test]
async fn test_failed_delete_triggers_full_resync() {
    let mut h = Harness::new().await;
    let program = h.editor.create_program(&mut h.catalog, march(10)).await.unwrap();

    h.set_writes_failing(true);
    let err = h
        .editor
        .delete_program(&mut h.catalog, &program.id, true)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Persistence { action: "excluir programação", .. }));

    // Remoção local provisória: o editor já foi fechado
    assert!(h.editor.active().is_none());
    // A ressincronização trouxe a programação de volta do banco
    assert_eq!(h.catalog.programs().len(), 1);
    assert_eq!(h.catalog.programs()[0].id, program.id);
}

#[tokio::test]
async fn test_program_is_persisted_with_routes_and_message() {
    let mut h = Harness::new().await;
    h.editor.create_program(&mut h.catalog, march(10)).await.unwrap();
    let form = h.route(&["Campinas", "", "Jundiaí"]);
    let saved = h.editor.submit_route(&mut h.catalog, form).await.unwrap();

    // Outro catálogo lendo o mesmo banco vê exatamente o que foi gravado
    let shared: Arc<dyn DocumentStore> = h.store.clone();
    let mut fresh = Catalog::new(shared);
    fresh.reload().await;
    assert_eq!(fresh.programs()[0].routes, saved.routes);
    assert_eq!(fresh.programs()[0].message, saved.message);
}

#[tokio::test]
async fn test_read_failure_is_distinguished_from_empty() {
    let mut h = Harness::new().await;
    h.store.fail_lists.store(true, Ordering::SeqCst);

    let report = h.catalog.reload().await;
    assert!(!report.is_complete());
    assert!(matches!(report.drivers, ReadOutcome::Failed(_)));
    assert!(h.catalog.drivers().is_empty());

    h.store.fail_lists.store(false, Ordering::SeqCst);
    let report = h.catalog.reload().await;
    assert!(report.is_complete());
    assert_eq!(h.catalog.drivers().len(), 1);
}

#[tokio::test]
async fn test_sequence_reuses_count_after_deletion() {
    let mut h = Harness::new().await;
    let first = h.editor.create_program(&mut h.catalog, march(10)).await.unwrap();
    let second = h.editor.create_program(&mut h.catalog, march(10)).await.unwrap();

    h.editor
        .delete_program(&mut h.catalog, &first.id, true)
        .await
        .unwrap();

    assert_eq!(h.catalog.find_program(&second.id).unwrap().sequence, 2);
    // Contagem da data + 1: a numeração não é densa depois de exclusões
    let third = h.editor.create_program(&mut h.catalog, march(10)).await.unwrap();
    assert_eq!(third.sequence, 2);
}
