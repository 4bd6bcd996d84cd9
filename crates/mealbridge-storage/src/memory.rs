//! In-memory storage backend.
//!
//! Used by tests and local experiments. Supports fault injection on the
//! upload path so failure handling can be exercised without a real backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;

#[derive(Clone)]
pub struct MemoryStorage {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    base_url: String,
    fail_uploads: Arc<AtomicBool>,
    upload_count: Arc<AtomicUsize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage {
            objects: Arc::new(Mutex::new(HashMap::new())),
            base_url: "memory://stories".to_string(),
            fail_uploads: Arc::new(AtomicBool::new(false)),
            upload_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make subsequent uploads fail with a backend error.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Number of upload attempts that reached this backend (including failed ones).
    pub fn upload_count(&self) -> usize {
        self.upload_count.load(Ordering::SeqCst)
    }

    /// Number of objects currently stored.
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Stored keys in arbitrary order.
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload(
        &self,
        key: &str,
        _content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        self.upload_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed(
                "injected upload failure".to_string(),
            ));
        }

        let size = data.len();
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), data);

        tracing::debug!(key = %key, size_bytes = size, "Memory storage upload successful");

        Ok(key.to_string())
    }

    async fn public_url(&self, key: &str) -> StorageResult<String> {
        Ok(format!("{}/{}", self.base_url, key))
    }

    async fn download(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.objects.lock().unwrap().contains_key(key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        let key = storage
            .upload("storyImages/a.png", "image/png", b"bytes".to_vec())
            .await
            .unwrap();

        assert!(storage.exists(&key).await.unwrap());
        assert_eq!(storage.download(&key).await.unwrap(), b"bytes".to_vec());
        assert_eq!(
            storage.public_url(&key).await.unwrap(),
            "memory://stories/storyImages/a.png"
        );

        storage.delete(&key).await.unwrap();
        assert!(!storage.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn test_fault_injection_counts_attempts() {
        let storage = MemoryStorage::new();
        storage.set_fail_uploads(true);

        let result = storage
            .upload("storyImages/a.png", "image/png", b"bytes".to_vec())
            .await;
        assert!(matches!(result, Err(StorageError::UploadFailed(_))));
        assert_eq!(storage.upload_count(), 1);
        assert_eq!(storage.object_count(), 0);

        storage.set_fail_uploads(false);
        storage
            .upload("storyImages/a.png", "image/png", b"bytes".to_vec())
            .await
            .unwrap();
        assert_eq!(storage.upload_count(), 2);
        assert_eq!(storage.object_count(), 1);
    }
}
