//! Gateway de persistência
//!
//! Contrato mínimo de um banco de documentos: criar, listar por data de
//! criação (mais recente primeiro), mesclar campos e apagar por id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Collection;

/// Falhas do gateway
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document '{id}' not found in '{collection}'")]
    Missing { collection: Collection, id: String },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Documento como o gateway devolve
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl StoredDocument {
    /// Converte em registro de domínio, injetando `id` e `createdAt`
    pub fn into_record<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        let mut data = self.data;
        if let Value::Object(map) = &mut data {
            map.insert("id".to_string(), Value::String(self.id));
            map.insert("createdAt".to_string(), serde_json::to_value(self.created_at)?);
        }
        serde_json::from_value(data)
    }
}

/// Resultado de uma criação: id canônico e carimbo do servidor
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedDocument {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(&self, collection: Collection, data: Value) -> StoreResult<CreatedDocument>;

    /// Varredura completa, ordenada por `createdAt` decrescente
    async fn list(&self, collection: Collection) -> StoreResult<Vec<StoredDocument>>;

    /// Mescla superficial dos campos de `patch` no documento
    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()>;

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()>;
}

/// Serializa um registro no corpo de documento
pub fn encode<T: Serialize>(record: &T) -> StoreResult<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Decodifica uma listagem, descartando documentos malformados
pub fn decode_all<T: DeserializeOwned>(collection: Collection, docs: Vec<StoredDocument>) -> Vec<T> {
    docs.into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match doc.into_record::<T>() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("⚠️ Documento '{}' em '{}' ignorado: {}", id, collection, e);
                    None
                }
            }
        })
        .collect()
}
