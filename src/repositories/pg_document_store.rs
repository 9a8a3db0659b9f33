//! Banco de documentos sobre PostgreSQL
//!
//! Todas as coleções vivem na tabela `documents`, com o corpo em JSONB.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::document_store::{CreatedDocument, DocumentStore, StoreError, StoreResult, StoredDocument};
use crate::models::Collection;

pub const CREATE_DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id UUID PRIMARY KEY,
    collection TEXT NOT NULL,
    data JSONB NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

pub const CREATE_DOCUMENTS_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS documents_collection_created_at_idx
    ON documents (collection, created_at DESC)
"#;

#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Value,
    created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn parse_id(collection: Collection, id: &str) -> StoreResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| StoreError::Missing {
            collection,
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, collection: Collection, data: Value) -> StoreResult<CreatedDocument> {
        let id = Uuid::new_v4();

        let (created_at,): (DateTime<Utc>,) = sqlx::query_as(
            r#"
            INSERT INTO documents (id, collection, data, created_at)
            VALUES ($1, $2, $3, now())
            RETURNING created_at
            "#,
        )
        .bind(id)
        .bind(collection.as_str())
        .bind(data)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("📄 Documento {} criado em '{}'", id, collection);
        Ok(CreatedDocument {
            id: id.to_string(),
            created_at,
        })
    }

    async fn list(&self, collection: Collection) -> StoreResult<Vec<StoredDocument>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data, created_at FROM documents WHERE collection = $1 ORDER BY created_at DESC",
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| StoredDocument {
                id: row.id.to_string(),
                data: row.data,
                created_at: row.created_at,
            })
            .collect())
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()> {
        let uuid = Self::parse_id(collection, id)?;

        let result = sqlx::query(
            "UPDATE documents SET data = data || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(uuid)
        .bind(patch)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing {
                collection,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        // Ids que não são UUID nunca foram gravados aqui: nada a apagar
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(());
        };

        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
