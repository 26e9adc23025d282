//! Durable change log for detected instructor changes.
//!
//! Records are append-only. No idempotency key is stored, so recording the
//! same transition twice produces two rows.

pub mod sql;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ChangeRecord;

// Re-export for convenience
pub use sql::SqlChangeLog;

/// Trait for change log backends.
#[async_trait]
pub trait ChangeLogSink: Send {
    /// Durably append one change. Errors are returned to the caller as is.
    async fn record(&mut self, change: &ChangeRecord) -> Result<()>;
}
