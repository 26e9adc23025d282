//! Diff calculation between two roster snapshots.
//!
//! Every course of the current snapshot is compared against the same
//! course in the previous one; each instructor that disappeared becomes a
//! `removed` record and each newcomer an `added` record.

use crate::models::{ChangeRecord, InstructorSet, Snapshot};

/// Calculator for computing instructor changes between snapshots.
#[derive(Debug, Clone, Default)]
pub struct DiffCalculator {
    /// Whether courses missing from the current snapshot report their
    /// former instructors as removed
    report_dropped_courses: bool,
}

impl DiffCalculator {
    /// Create a calculator driven by the current snapshot's courses only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator that also reports courses that disappeared.
    pub fn with_dropped_courses(report_dropped_courses: bool) -> Self {
        Self {
            report_dropped_courses,
        }
    }

    /// Calculate the changes from `previous` to `current`.
    ///
    /// Within a course, removals come before additions and names are in
    /// sorted order.
    pub fn calculate(&self, previous: &Snapshot, current: &Snapshot) -> Vec<ChangeRecord> {
        let empty = InstructorSet::new();
        let mut changes = Vec::new();

        for (course, current_set) in current {
            let previous_set = previous.get(course).unwrap_or(&empty);

            changes.extend(
                previous_set
                    .difference(current_set)
                    .map(|name| ChangeRecord::removed(course, name)),
            );
            changes.extend(
                current_set
                    .difference(previous_set)
                    .map(|name| ChangeRecord::added(course, name)),
            );
        }

        if self.report_dropped_courses {
            for (course, previous_set) in previous {
                if !current.contains(course) {
                    changes.extend(
                        previous_set
                            .iter()
                            .map(|name| ChangeRecord::removed(course, name)),
                    );
                }
            }
        }

        changes
    }
}

/// Convenience function to calculate changes with the default policy.
pub fn calculate_diff(previous: &Snapshot, current: &Snapshot) -> Vec<ChangeRecord> {
    DiffCalculator::new().calculate(previous, current)
}
