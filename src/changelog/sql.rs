// src/changelog/sql.rs

//! SQL change log backend.
//!
//! Holds one connection for the whole run and writes each change with a
//! single `INSERT` into the configured table:
//!
//! ```text
//! course_name | action  | teacher | changed_at
//! ------------+---------+---------+--------------------
//! CS101       | added   | Bob     | 2024-01-13 06:00:02
//! ```
//!
//! The connection URL picks the driver (`mysql://` in production,
//! `sqlite:` for local runs).

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{AnyConnection, Connection};

use crate::changelog::ChangeLogSink;
use crate::error::{AppError, Result};
use crate::models::{ChangeRecord, DatabaseConfig};

/// Change log writing to a relational table.
pub struct SqlChangeLog {
    conn: AnyConnection,
    insert_sql: String,
}

impl SqlChangeLog {
    /// Open the connection and optionally create the table.
    ///
    /// Any failure here is reported as `AppError::Connect`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        sqlx::any::install_default_drivers();

        log::info!("Connecting to database: {}", mask_database_url(&config.url));
        let timeout = Duration::from_secs(config.connect_timeout_secs.max(1));
        let conn = tokio::time::timeout(timeout, AnyConnection::connect(&config.url))
            .await
            .map_err(|_| AppError::connect(format!("timed out after {}s", timeout.as_secs())))?
            .map_err(AppError::connect)?;

        let mut sink = Self {
            conn,
            insert_sql: format!(
                "INSERT INTO {} (course_name, action, teacher) VALUES (?, ?, ?)",
                config.table
            ),
        };

        if config.create_table {
            sink.ensure_table(&config.table)
                .await
                .map_err(AppError::connect)?;
        }

        Ok(sink)
    }

    async fn ensure_table(&mut self, table: &str) -> Result<()> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                course_name VARCHAR(255) NOT NULL,
                action VARCHAR(16) NOT NULL,
                teacher VARCHAR(255) NOT NULL,
                changed_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )"
        );
        sqlx::query(&ddl).execute(&mut self.conn).await?;
        Ok(())
    }

    /// Close the connection cleanly.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

#[async_trait]
impl ChangeLogSink for SqlChangeLog {
    async fn record(&mut self, change: &ChangeRecord) -> Result<()> {
        sqlx::query(&self.insert_sql)
            .bind(change.course.as_str())
            .bind(change.action.as_str())
            .bind(change.instructor.as_str())
            .execute(&mut self.conn)
            .await?;
        Ok(())
    }
}

/// Hide the password part of a connection URL for logging.
fn mask_database_url(url_str: &str) -> String {
    match url::Url::parse(url_str) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("****"));
            url.to_string()
        }
        Ok(url) => url.to_string(),
        Err(_) => "<unparseable url>".to_string(),
    }
}
