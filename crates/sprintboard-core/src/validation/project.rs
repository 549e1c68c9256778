//! Project validator.

use super::{reject, Validation, Violation, ViolationKind};
use crate::models::{Project, ProjectStatus};

/// A project is acceptable when its status is absent or one of
/// `draft`, `active`, `archived`. No other field is checked.
pub fn validate_project(project: Option<&Project>) -> Validation {
    let Some(project) = project else {
        return Err(Violation::missing("Project is required."));
    };
    if let Some(status) = project.status.as_deref() {
        if status.parse::<ProjectStatus>().is_err() {
            return reject(ViolationKind::Enumeration, "Project status is invalid.");
        }
    }
    Ok(())
}
