//! Preconditions on operations, checked before any document is built.

use super::{is_blank, Validation, Violation};

/// A sprint can only be created under a named project.
pub fn validate_create_sprint_request(project_id: Option<&str>) -> Validation {
    if is_blank(project_id) {
        return Err(Violation::missing(
            "A project ID is required to create a sprint.",
        ));
    }
    Ok(())
}
