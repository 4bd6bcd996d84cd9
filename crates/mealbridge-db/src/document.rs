//! Document-store abstraction.
//!
//! Documents are flat field maps keyed by a store-assigned id inside a named
//! collection. `update` merges the supplied fields into the existing document
//! and never touches fields it was not given.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;
use uuid::Uuid;

/// Flat field map of a document.
pub type FieldMap = Map<String, JsonValue>;

/// A persisted document together with its id.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub fields: FieldMap,
}

/// Document store operation errors
#[derive(Debug, Error)]
pub enum DocStoreError {
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: Uuid },

    #[error("Invalid document {collection}/{id}: {reason}")]
    InvalidDocument {
        collection: String,
        id: Uuid,
        reason: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document store backend error: {0}")]
    Backend(String),
}

/// Result type for document store operations
pub type DocResult<T> = Result<T, DocStoreError>;

/// Document store abstraction
///
/// Implementations own id assignment on create and merge semantics on update.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and return its store-assigned id.
    async fn create(&self, collection: &str, fields: FieldMap) -> DocResult<Uuid>;

    /// Merge the supplied fields into an existing document.
    ///
    /// Fields absent from `fields` keep their persisted values. Returns
    /// `NotFound` when no document exists under the id.
    async fn update(&self, collection: &str, id: Uuid, fields: FieldMap) -> DocResult<()>;

    /// Fetch a document by id.
    async fn get(&self, collection: &str, id: Uuid) -> DocResult<Option<Document>>;
}
