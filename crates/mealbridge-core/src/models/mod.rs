//! Data models for the application
//!
//! Each sub-module represents a specific feature area.

mod story;
mod user;

// Re-export all models for convenient imports
pub use story::*;
pub use user::*;
