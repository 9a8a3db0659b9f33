//! Banco de documentos em memória
//!
//! Mesmo contrato do Postgres, sem durabilidade. Usado pelo backend `memory`
//! e pelos testes.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::document_store::{CreatedDocument, DocumentStore, StoreError, StoreResult, StoredDocument};
use crate::models::Collection;

#[derive(Default)]
pub struct MemoryDocumentStore {
    // Ordem de inserção por coleção
    collections: RwLock<HashMap<Collection, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create(&self, collection: Collection, data: Value) -> StoreResult<CreatedDocument> {
        if !data.is_object() {
            return Err(StoreError::Unavailable(format!(
                "documents in '{}' must be objects",
                collection
            )));
        }

        let doc = StoredDocument {
            id: Uuid::new_v4().to_string(),
            data,
            created_at: Utc::now(),
        };
        let created = CreatedDocument {
            id: doc.id.clone(),
            created_at: doc.created_at,
        };

        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(doc);
        Ok(created)
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<StoredDocument>> {
        let collections = self.collections.read().await;
        let mut docs: Vec<StoredDocument> = collections
            .get(&collection)
            .map(|docs| docs.iter().rev().cloned().collect())
            .unwrap_or_default();
        // Ordenação estável: empates ficam do mais novo para o mais antigo
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(docs)
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(&collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
            .ok_or_else(|| StoreError::Missing {
                collection,
                id: id.to_string(),
            })?;

        match (&mut doc.data, patch) {
            (Value::Object(target), Value::Object(fields)) => {
                for (key, value) in fields {
                    target.insert(key, value);
                }
                Ok(())
            }
            _ => Err(StoreError::Unavailable("patch must be an object".to_string())),
        }
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        if let Some(docs) = self.collections.write().await.get_mut(&collection) {
            docs.retain(|d| d.id != id);
        }
        Ok(())
    }
}
