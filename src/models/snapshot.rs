//! Point-in-time course to instructor mapping.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Instructor names assigned to one course.
pub type InstructorSet = BTreeSet<String>;

/// Mapping from course key to the set of instructor names.
///
/// Serializes as a JSON object of sorted name lists; lists read back
/// into sets, so duplicates and ordering in a stored file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    courses: BTreeMap<String, InstructorSet>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructors of a course, if the course is present.
    pub fn get(&self, course: &str) -> Option<&InstructorSet> {
        self.courses.get(course)
    }

    pub fn contains(&self, course: &str) -> bool {
        self.courses.contains_key(course)
    }

    /// Add instructors to a course, creating it when absent.
    pub fn merge(&mut self, course: impl Into<String>, instructors: InstructorSet) {
        self.courses.entry(course.into()).or_default().extend(instructors);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, InstructorSet> {
        self.courses.iter()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Total assignments across all courses.
    pub fn instructor_count(&self) -> usize {
        self.courses.values().map(BTreeSet::len).sum()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a InstructorSet);
    type IntoIter = btree_map::Iter<'a, String, InstructorSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C, I, N> FromIterator<(C, I)> for Snapshot
where
    C: Into<String>,
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        let mut snapshot = Snapshot::new();
        for (course, names) in iter {
            snapshot.merge(course, names.into_iter().map(Into::into).collect());
        }
        snapshot
    }
}
