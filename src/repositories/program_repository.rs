use serde_json::json;
use std::sync::Arc;

use crate::models::{Collection, DailyProgram, NewDailyProgram, Route};
use crate::repositories::document_store::{decode_all, encode, DocumentStore};
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct ProgramRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProgramRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, program: NewDailyProgram) -> AppResult<DailyProgram> {
        let action = "criar programação";
        let data = encode(&program).map_err(AppError::persistence(action))?;
        let created = self
            .store
            .create(Collection::Programs, data)
            .await
            .map_err(AppError::persistence(action))?;

        Ok(DailyProgram {
            id: created.id,
            date: program.date,
            sequence: program.sequence,
            routes: program.routes,
            message: program.message,
            created_at: created.created_at,
        })
    }

    pub async fn list(&self) -> AppResult<Vec<DailyProgram>> {
        let docs = self
            .store
            .list(Collection::Programs)
            .await
            .map_err(AppError::persistence("carregar programações"))?;
        Ok(decode_all(Collection::Programs, docs))
    }

    /// Grava roteiros e mensagem juntos, numa única mescla
    pub async fn update_routes(
        &self,
        id: &str,
        routes: &[Route],
        message: &str,
        action: &'static str,
    ) -> AppResult<()> {
        let patch = json!({ "routes": routes, "message": message });
        self.store
            .update(Collection::Programs, id, patch)
            .await
            .map_err(AppError::persistence(action))
    }

    pub async fn update_message(&self, id: &str, message: &str) -> AppResult<()> {
        self.store
            .update(Collection::Programs, id, json!({ "message": message }))
            .await
            .map_err(AppError::persistence("atualizar mensagem"))
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store
            .delete(Collection::Programs, id)
            .await
            .map_err(AppError::persistence("excluir programação"))
    }
}
