//! Storage abstractions for snapshot persistence.
//!
//! Only the latest snapshot is retained: every successful run overwrites
//! the previous one. History lives in the change log, not here.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Snapshot;

// Re-export for convenience
pub use local::LocalSnapshotStore;

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Replace the stored snapshot.
    async fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Load the stored snapshot, or `None` before the first run.
    async fn load(&self) -> Result<Option<Snapshot>>;
}
