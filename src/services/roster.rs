// src/services/roster.rs

//! Roster aggregation service.
//!
//! Lists the term's courses, then fetches each course's instructors
//! concurrently and folds the results into a `Snapshot`.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{ApiConfig, Config, Course, CourseKey, Instructor, InstructorSet, Snapshot};
use crate::services::{HttpPageSource, Pager};
use crate::utils::http;

/// Service building the current course to instructor snapshot.
pub struct RosterAggregator {
    pager: Pager,
    api: ApiConfig,
    max_concurrent: usize,
    course_key: CourseKey,
}

impl RosterAggregator {
    /// Create an aggregator reading pages through `pager`.
    pub fn new(pager: Pager, config: &Config) -> Self {
        Self {
            pager,
            api: config.api.clone(),
            max_concurrent: config.http.max_concurrent.max(1),
            course_key: config.reconcile.course_key,
        }
    }

    /// Create an aggregator talking to the configured HTTP API.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = http::create_async_client(&config.http, &config.api)?;
        let pager = Pager::new(Arc::new(HttpPageSource::new(client)));
        Ok(Self::new(pager, config))
    }

    /// Fetch every course of the configured term.
    pub async fn fetch_courses(&self) -> Result<Vec<Course>> {
        self.pager
            .fetch_all(&self.api.courses_url()?, &self.api.course_query())
            .await
    }

    /// Fetch the instructor names of one course.
    pub async fn fetch_instructors(&self, course: &Course) -> Result<InstructorSet> {
        let instructors: Vec<Instructor> = self
            .pager
            .fetch_all(
                &self.api.course_users_url(&course.id)?,
                &self.api.instructor_query(),
            )
            .await?;
        Ok(instructors.into_iter().map(|i| i.name).collect())
    }

    /// Build the full snapshot.
    ///
    /// Any failed course fetch fails the whole snapshot: a partial one
    /// would show every missing course's instructors as removed.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let courses = self.fetch_courses().await?;
        log::info!(
            "Fetched {} courses for term {}",
            courses.len(),
            self.api.term_id
        );

        let mut results = stream::iter(&courses)
            .map(|course| async move { (course, self.fetch_instructors(course).await) })
            .buffer_unordered(self.max_concurrent);

        let mut snapshot = Snapshot::new();
        while let Some((course, result)) = results.next().await {
            let instructors = match result {
                Ok(instructors) => instructors,
                Err(error) => {
                    log::error!(
                        "Failed to fetch instructors for {} ({}): {}",
                        course.name,
                        course.id,
                        error
                    );
                    return Err(error);
                }
            };

            let key = self.key_for(course);
            if snapshot.contains(&key) {
                log::warn!(
                    "Course key '{}' is shared by several courses; merging their instructors",
                    key
                );
            }
            snapshot.merge(key, instructors);
        }

        log::info!(
            "Snapshot built: {} courses, {} instructor assignments",
            snapshot.course_count(),
            snapshot.instructor_count()
        );
        Ok(snapshot)
    }

    fn key_for(&self, course: &Course) -> String {
        match self.course_key {
            CourseKey::Name => course.name.clone(),
            CourseKey::Id => course.id.clone(),
        }
    }
}
