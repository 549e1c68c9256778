//! Consistency checks for planning documents, projects and requests.
//!
//! Every validator is a pure function returning [`Validation`]: `Ok(())` when
//! the input is acceptable, or the first [`Violation`] found. Validators never
//! accumulate; rules are evaluated in a fixed order and the first failing rule
//! decides the message.
//!
//! ```text
//! validate_state
//!   ├─ sprint window
//!   ├─ events   (stored order)
//!   ├─ members  (stored order, availability events nested)
//!   └─ tasks    (stored order, running set of seen ids)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sprintboard_core::{build_default_state, validate_state, ViolationKind};
//! use sprintboard_core::models::TaskItem;
//!
//! let mut document = build_default_state(Some("Sprint 12"));
//! assert!(validate_state(Some(&document)).is_ok());
//!
//! let task = TaskItem {
//!     id: Some("T1".to_string()),
//!     name: Some("Wire up login".to_string()),
//!     dependencies: vec!["T1".to_string()],
//!     ..Default::default()
//! };
//! document.tasks_mut().items.push(Some(task));
//!
//! let violation = validate_state(Some(&document)).unwrap_err();
//! assert_eq!(violation.kind, ViolationKind::Referential);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PlanningDocument;

mod project;
mod request;
mod state;


pub use project::validate_project;
pub use request::validate_create_sprint_request;
pub use state::{
    validate_event, validate_member, validate_sprint_window, validate_state, validate_task,
};

/// Outcome of a validator: success, or the first violation found.
pub type Validation = std::result::Result<(), Violation>;

/// Category of a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A mandatory value is null or blank
    MissingField,
    /// A numeric value is outside its allowed range
    OutOfRange,
    /// A value cannot be parsed
    Malformed,
    /// Two values are in the wrong order
    Ordering,
    /// An identifier occurs more than once
    Uniqueness,
    /// A reference points somewhere it must not
    Referential,
    /// A value is not a member of its closed set
    Enumeration,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::Malformed => "malformed",
            ViolationKind::Ordering => "ordering",
            ViolationKind::Uniqueness => "uniqueness",
            ViolationKind::Referential => "referential",
            ViolationKind::Enumeration => "enumeration",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single client-facing reason for rejecting an input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Violation {
    /// Category used by callers that want to branch on the failure
    pub kind: ViolationKind,
    /// Human-readable message shown to the client as-is
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn missing(message: &str) -> Self {
        Self::new(ViolationKind::MissingField, message)
    }
}

/// Parses a planning document from JSON text and validates it.
///
/// Returns the parsed document when it is acceptable. Malformed JSON yields
/// [`crate::SprintboardError::Serialization`]; a parsed but inconsistent
/// document yields [`crate::SprintboardError::Validation`], and so does a
/// top-level `null`.
pub fn validate_document_json(json: &str) -> crate::Result<PlanningDocument> {
    let document: Option<PlanningDocument> = serde_json::from_str(json)?;
    validate_state(document.as_ref())?;
    Ok(document.unwrap_or_default())
}

/// Shorthand for returning a violation from a validator.
pub(crate) fn reject(kind: ViolationKind, message: &str) -> Validation {
    Err(Violation::new(kind, message))
}

/// `true` for `None`, the empty string and whitespace-only strings.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}
