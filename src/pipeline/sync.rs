// src/pipeline/sync.rs

//! Roster sync pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::changelog::{ChangeLogSink, SqlChangeLog};
use crate::error::Result;
use crate::models::{ChangeAction, Config};
use crate::pipeline::DiffCalculator;
use crate::services::RosterAggregator;
use crate::storage::{LocalSnapshotStore, SnapshotStore};

/// Summary of a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub course_count: usize,
    pub instructor_count: usize,
    pub added: usize,
    pub removed: usize,
    /// No previous snapshot existed; the current one became the baseline
    pub baseline_seeded: bool,
}

/// Run one sync against the configured API, snapshot file and database.
///
/// The database connection is checked first; if it cannot be opened
/// nothing else happens. Once open it is closed on every exit path.
pub async fn run_sync(config: &Config) -> Result<SyncReport> {
    let mut sink = match SqlChangeLog::connect(&config.database).await {
        Ok(sink) => sink,
        Err(error) => {
            log::error!("Failed to connect to the database: {}. Exiting.", error);
            return Err(error);
        }
    };

    let outcome = async {
        let aggregator = RosterAggregator::from_config(config)?;
        let store = LocalSnapshotStore::new(&config.snapshot.path);
        let calculator =
            DiffCalculator::with_dropped_courses(config.reconcile.report_dropped_courses);
        reconcile(&aggregator, &store, &mut sink, &calculator).await
    }
    .await;

    if let Err(error) = sink.close().await {
        log::warn!("Failed to close database connection: {}", error);
    }

    outcome
}

/// Fetch the current snapshot, record its changes against the stored one
/// and replace the stored one.
///
/// Without a stored snapshot the current one only becomes the baseline.
/// A failed fetch leaves the stored snapshot and the change log untouched.
/// A failed write stops the run before the snapshot is replaced, so the
/// next run reports the same transition again.
pub async fn reconcile(
    aggregator: &RosterAggregator,
    store: &dyn SnapshotStore,
    sink: &mut dyn ChangeLogSink,
    calculator: &DiffCalculator,
) -> Result<SyncReport> {
    let start_time = Utc::now();
    log::info!("Started at {}", start_time.to_rfc3339());

    let current = aggregator.fetch_snapshot().await?;
    let previous = store.load().await?;

    let mut added = 0;
    let mut removed = 0;
    let baseline_seeded = match previous {
        Some(previous) => {
            for change in calculator.calculate(&previous, &current) {
                log::info!("{}", change);
                sink.record(&change).await?;
                match change.action {
                    ChangeAction::Added => added += 1,
                    ChangeAction::Removed => removed += 1,
                }
            }
            false
        }
        None => {
            log::info!("No previous data found. Saving current list as baseline.");
            true
        }
    };

    store.save(&current).await?;

    let end_time = Utc::now();
    log::info!(
        "Finished at {} ({} added, {} removed)",
        end_time.to_rfc3339(),
        added,
        removed
    );

    Ok(SyncReport {
        start_time,
        end_time,
        course_count: current.course_count(),
        instructor_count: current.instructor_count(),
        added,
        removed,
        baseline_seeded,
    })
}
