//! High-level planner API for managing projects and sprints.
//!
//! The [`Planner`] is the service layer between the interfaces (CLI, MCP) and
//! the database. Every mutating operation validates its input before anything
//! is written, so a rejected request leaves storage untouched.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │   Operations    │    │    Database     │
//! │   (CLI, MCP)    │───▶│ (project_ops,   │───▶│   (via db/)     │
//! │                 │    │  sprint_ops)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                          validation here
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`project_ops`]: Project listing, creation, merge-update and cascade delete
//! - [`sprint_ops`]: Sprint creation from the default document, state
//!   replacement and deletion
//!
//! Database work runs on the blocking thread pool; each call opens its own
//! connection to the configured file.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use sprintboard_core::{params::CreateSprint, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/sprintboard.db"))
//!     .build()
//!     .await?;
//!
//! // Unknown project ids are created on the fly
//! let sprint = planner
//!     .create_sprint(&CreateSprint {
//!         project_id: Some("project-demo".to_string()),
//!         title: Some("Sprint 1".to_string()),
//!     })
//!     .await?;
//! println!("{}", sprint.meta);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{db::Database, error::SprintboardError, error::Result};

pub mod builder;
pub mod project_ops;
pub mod sprint_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing projects and sprints.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(SprintboardError::join)?
    }
}
