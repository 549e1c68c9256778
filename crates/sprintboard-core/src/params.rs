//! Parameter structures for Sprintboard operations
//!
//! Shared parameter structures used across interfaces (CLI, MCP) without
//! framework-specific derives. Interface layers wrap these with their own
//! derives and convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP layer is only compiled with the
//! `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::PlanningDocument;

/// Generic parameters for operations requiring just an ID.
///
/// Used for show/delete of projects and sprints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

/// Parameters for creating a project.
///
/// Every field is optional; a blank name becomes "Untitled project" and a
/// blank status becomes `active`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateProject {
    /// Display name of the project
    pub name: Option<String>,
    /// Optional start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Optional end date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Optional free-text description
    pub description: Option<String>,
    /// One of draft, active, archived
    pub status: Option<String>,
}

/// Parameters for updating a project.
///
/// Absent fields keep their stored value; see
/// [`crate::models::Project::merged_with`] for the exact precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProject {
    /// ID of the project to update
    pub id: String,
    /// New name; blank keeps the current one
    pub name: Option<String>,
    /// New start date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// New end date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New status (draft, active, archived); blank keeps the current one
    pub status: Option<String>,
}

/// Parameters for listing the sprints of one project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListSprints {
    /// ID of the owning project
    pub project_id: String,
}

/// Parameters for creating a sprint with the default planning document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateSprint {
    /// ID of the owning project (required; created on the fly if unknown)
    pub project_id: Option<String>,
    /// Optional sprint title; blank becomes "Untitled sprint"
    pub title: Option<String>,
}

/// Parameters for replacing a sprint's whole planning document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReplaceSprintState {
    /// ID of the sprint to overwrite
    pub id: String,
    /// The complete new planning document
    pub state: Option<PlanningDocument>,
}

/// Parameters for validating a planning document without storing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidateState {
    /// The planning document to check
    pub state: Option<PlanningDocument>,
}
