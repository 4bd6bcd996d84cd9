//! In-memory document store for testing without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::document::{DocResult, DocStoreError, Document, DocumentStore, FieldMap};

#[derive(Clone)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<HashMap<(String, Uuid), FieldMap>>>,
    fail_writes: Arc<AtomicBool>,
    create_count: Arc<AtomicUsize>,
    update_count: Arc<AtomicUsize>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
            fail_writes: Arc::new(AtomicBool::new(false)),
            create_count: Arc::new(AtomicUsize::new(0)),
            update_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make subsequent create/update calls fail with a backend error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn create_count(&self) -> usize {
        self.create_count.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_count.load(Ordering::SeqCst)
    }

    /// Number of documents currently stored in a collection.
    pub fn document_count(&self, collection: &str) -> usize {
        self.documents
            .lock()
            .unwrap()
            .keys()
            .filter(|(c, _)| c == collection)
            .count()
    }

    fn check_writable(&self) -> DocResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DocStoreError::Backend(
                "injected write failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn create(&self, collection: &str, fields: FieldMap) -> DocResult<Uuid> {
        self.create_count.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;

        let id = Uuid::new_v4();
        self.documents
            .lock()
            .unwrap()
            .insert((collection.to_string(), id), fields);

        Ok(id)
    }

    async fn update(&self, collection: &str, id: Uuid, fields: FieldMap) -> DocResult<()> {
        self.update_count.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;

        let mut documents = self.documents.lock().unwrap();
        let existing = documents
            .get_mut(&(collection.to_string(), id))
            .ok_or_else(|| DocStoreError::NotFound {
                collection: collection.to_string(),
                id,
            })?;

        for (key, value) in fields {
            existing.insert(key, value);
        }

        Ok(())
    }

    async fn get(&self, collection: &str, id: Uuid) -> DocResult<Option<Document>> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .get(&(collection.to_string(), id))
            .cloned()
            .map(|fields| Document { id, fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> FieldMap {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = MemoryDocumentStore::new();

        let id = store
            .create("communityStories", fields(json!({ "title": "First" })))
            .await
            .unwrap();

        let doc = store.get("communityStories", id).await.unwrap().unwrap();
        assert_eq!(doc.fields["title"], "First");
        assert_eq!(store.document_count("communityStories"), 1);
        assert_eq!(store.document_count("other"), 0);
    }

    #[tokio::test]
    async fn test_update_merges_named_fields_only() {
        let store = MemoryDocumentStore::new();

        let id = store
            .create(
                "communityStories",
                fields(json!({ "title": "First", "likes": 7 })),
            )
            .await
            .unwrap();

        store
            .update("communityStories", id, fields(json!({ "title": "Second" })))
            .await
            .unwrap();

        let doc = store.get("communityStories", id).await.unwrap().unwrap();
        assert_eq!(doc.fields["title"], "Second");
        assert_eq!(doc.fields["likes"], 7);
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let store = MemoryDocumentStore::new();

        let result = store
            .update(
                "communityStories",
                Uuid::new_v4(),
                fields(json!({ "title": "x" })),
            )
            .await;

        assert!(matches!(result, Err(DocStoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_fault_injection_counts_writes() {
        let store = MemoryDocumentStore::new();
        store.set_fail_writes(true);

        let result = store
            .create("communityStories", fields(json!({ "title": "x" })))
            .await;
        assert!(matches!(result, Err(DocStoreError::Backend(_))));
        assert_eq!(store.create_count(), 1);
        assert_eq!(store.document_count("communityStories"), 0);
    }
}
