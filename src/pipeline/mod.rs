//! Pipeline entry points for roster tracking.
//!
//! - `run_sync`: Fetch, diff, record and persist one snapshot
//! - `DiffCalculator`: Compare two snapshots

pub mod diff;
pub mod sync;

pub use diff::{DiffCalculator, calculate_diff};
pub use sync::{SyncReport, reconcile, run_sync};
