//! Storage backend identifiers shared between configuration and the
//! storage crate.

use serde::{Deserialize, Serialize};

/// Available object-storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Local,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::S3 => "s3",
            StorageBackend::Local => "local",
            StorageBackend::Memory => "memory",
        }
    }

    /// Parse a backend identifier from configuration. Unknown values return None.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "s3" => Some(StorageBackend::S3),
            "local" => Some(StorageBackend::Local),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}
