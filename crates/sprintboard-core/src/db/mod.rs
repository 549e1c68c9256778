//! Database operations and SQLite management for projects and sprints.
//!
//! Projects and sprints live in two tables. A sprint row carries its planning
//! document as a JSON text column next to denormalised listing columns
//! (title, dates, lifecycle status) that are rewritten together with the
//! document on every write.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod project_queries;
pub mod sprint_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
