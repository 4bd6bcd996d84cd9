//! Postgres-backed document store.
//!
//! Documents live in one `documents` table keyed by (collection, id) with a
//! JSONB field map. `update` uses JSONB concatenation so only the supplied
//! fields change.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::document::{DocResult, DocStoreError, Document, DocumentStore, FieldMap};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    collection TEXT NOT NULL,
    id UUID NOT NULL,
    fields JSONB NOT NULL,
    PRIMARY KEY (collection, id)
)
"#;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and ensure the documents table exists.
    pub async fn connect(database_url: &str) -> DocResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the backing table when it does not exist yet.
    pub async fn ensure_schema(&self) -> DocResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, collection: &str, fields: FieldMap) -> DocResult<Uuid> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (collection, id, fields) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id)
            .bind(JsonValue::Object(fields))
            .execute(&self.pool)
            .await?;

        tracing::info!(collection = %collection, id = %id, "Document created");

        Ok(id)
    }

    async fn update(&self, collection: &str, id: Uuid, fields: FieldMap) -> DocResult<()> {
        let result =
            sqlx::query("UPDATE documents SET fields = fields || $3 WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .bind(JsonValue::Object(fields))
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DocStoreError::NotFound {
                collection: collection.to_string(),
                id,
            });
        }

        tracing::info!(collection = %collection, id = %id, "Document updated");

        Ok(())
    }

    async fn get(&self, collection: &str, id: Uuid) -> DocResult<Option<Document>> {
        let fields: Option<JsonValue> =
            sqlx::query_scalar("SELECT fields FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match fields {
            None => Ok(None),
            Some(JsonValue::Object(fields)) => Ok(Some(Document { id, fields })),
            Some(other) => Err(DocStoreError::InvalidDocument {
                collection: collection.to_string(),
                id,
                reason: format!("fields column holds non-object JSON: {}", other),
            }),
        }
    }
}
