//! MealBridge document-store layer
//!
//! This crate defines the `DocumentStore` abstraction the stories workflow
//! persists through: flat field-map documents grouped into named collections,
//! with store-assigned ids. Two implementations are provided: a Postgres
//! JSONB-backed store and an in-memory store for tests.

pub mod document;
pub mod memory;
pub mod postgres;

// Re-export commonly used types
pub use document::{DocResult, DocStoreError, Document, DocumentStore, FieldMap};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
