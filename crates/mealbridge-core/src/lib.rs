//! MealBridge Core Library
//!
//! This crate provides the core domain models, error types, configuration,
//! and clock abstraction shared across all MealBridge components.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod telemetry;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AppConfig;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use telemetry::init_telemetry;
