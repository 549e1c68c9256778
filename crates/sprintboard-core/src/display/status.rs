//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::validation::Validation;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&Validation> for OperationStatus {
    fn from(validation: &Validation) -> Self {
        match validation {
            Ok(()) => Self::success("Document is valid.".to_string()),
            Err(violation) => Self::failure(format!("{violation} ({})", violation.kind)),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
