// src/models/mod.rs

//! Domain models for the roster tracker.

mod change;
mod config;
mod course;
mod snapshot;

// Re-export all public types
pub use change::{ChangeAction, ChangeRecord};
pub use config::{
    API_TOKEN_ENV, ApiConfig, Config, CourseKey, DATABASE_URL_ENV, DatabaseConfig, HttpConfig,
    ReconcileConfig, SnapshotConfig,
};
pub use course::{Course, Instructor};
pub use snapshot::{InstructorSet, Snapshot};
