//! MealBridge Storage Library
//!
//! This crate provides the object-storage abstraction and implementations
//! for story images. It includes the Storage trait and backends for S3,
//! the local filesystem, and an in-memory store used in tests.
//!
//! # Storage key format
//!
//! Story image keys have the form `storyImages/{uid}_{timestamp_ms}_{filename}`.
//! Filenames are sanitized before key derivation; keys must not contain `..`
//! or a leading `/`. Key generation is centralized in the `keys` module so
//! all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{sanitize_filename, story_image_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use mealbridge_core::StorageBackend;
pub use memory::MemoryStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
