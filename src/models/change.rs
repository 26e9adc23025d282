//! Change log entries produced by the diff engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of an instructor change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Added,
    Removed,
}

impl ChangeAction {
    /// Value stored in the `action` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Added => "added",
            ChangeAction::Removed => "removed",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instructor added to or removed from one course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Snapshot key of the course
    pub course: String,
    pub action: ChangeAction,
    /// Instructor display name
    pub instructor: String,
}

impl ChangeRecord {
    pub fn added(course: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            action: ChangeAction::Added,
            instructor: instructor.into(),
        }
    }

    pub fn removed(course: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            action: ChangeAction::Removed,
            instructor: instructor.into(),
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In {}, {} was {}",
            self.course, self.instructor, self.action
        )
    }
}
