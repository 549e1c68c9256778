//! Error types for the sprintboard library.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::Violation;

/// Comprehensive error type for all sprintboard operations.
#[derive(Error, Debug)]
pub enum SprintboardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Project not found for the given ID
    #[error("Project with ID {id} not found")]
    ProjectNotFound { id: String },
    /// Sprint not found for the given ID
    #[error("Sprint with ID {id} not found")]
    SprintNotFound { id: String },
    /// A candidate document or project was rejected by a validator
    #[error("{0}")]
    Validation(#[from] Violation),
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> SprintboardError {
        SprintboardError::Database {
            message: self.message,
            source,
        }
    }
}

impl SprintboardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Wraps a failed `spawn_blocking` join into a configuration error.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// store or the environment.
    ///
    /// Interfaces map these to "bad request" or "not found" style responses;
    /// everything else is an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::ProjectNotFound { .. }
                | Self::SprintNotFound { .. }
                | Self::Serialization { .. }
        )
    }

    /// The violation behind a rejected document, if that is what this is.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Validation(violation) => Some(violation),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SprintboardError::database(message).with_source(e))
    }
}

/// Result type alias for sprintboard operations
pub type Result<T> = std::result::Result<T, SprintboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ViolationKind;

    #[test]
    fn test_validation_error_displays_bare_message() {
        let err = SprintboardError::from(Violation::new(
            ViolationKind::Ordering,
            "Sprint start date cannot be after the end date.",
        ));
        assert_eq!(
            err.to_string(),
            "Sprint start date cannot be after the end date."
        );
        assert!(err.is_client_error());
        assert_eq!(err.violation().map(|v| v.kind), Some(ViolationKind::Ordering));
    }

    #[test]
    fn test_database_error_is_not_client_error() {
        let err = SprintboardError::database("Failed to query sprint")
            .with_source(rusqlite::Error::QueryReturnedNoRows);
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("Database error: Failed to query sprint"));
        assert!(err.violation().is_none());
    }

    #[test]
    fn test_not_found_errors_name_the_id() {
        let err = SprintboardError::SprintNotFound {
            id: "sprint-42".to_string(),
        };
        assert_eq!(err.to_string(), "Sprint with ID sprint-42 not found");
        assert!(err.is_client_error());
    }
}
