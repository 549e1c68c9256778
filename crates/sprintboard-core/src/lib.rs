//! Core library for Sprintboard, a sprint capacity planning tool.
//!
//! A sprint is described by a single JSON *planning document*: the sprint
//! window, a working calendar, team events, members with their availability,
//! tasks with dependencies, global scheduling configuration and a lifecycle
//! marker. This crate owns that document model and everything that guards it:
//!
//! - [`models`]: the document, project and sprint types and their wire format
//! - [`validation`]: pure validators returning the first [`Violation`] found
//! - [`defaults`]: the canonical document every new sprint starts with
//! - [`planner`]: the async service that validates, stores and lists projects
//!   and sprints
//! - [`db`]: SQLite persistence behind the planner
//! - [`display`]: markdown formatting for terminal and MCP output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sprintboard_core::{
//!     params::{CreateProject, CreateSprint, ReplaceSprintState},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("sprintboard.db"))
//!     .build()
//!     .await?;
//!
//! let project = planner
//!     .create_project(&CreateProject {
//!         name: Some("Apollo".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let sprint = planner
//!     .create_sprint(&CreateSprint {
//!         project_id: Some(project.id.clone()),
//!         title: Some("Sprint 1".to_string()),
//!     })
//!     .await?;
//!
//! // Edit the document client-side, then store it back whole
//! let mut state = sprint.state.clone();
//! if let Some(window) = state.sprint.as_mut() {
//!     window.start_date = Some("2025-03-03".to_string());
//!     window.end_date = Some("2025-03-14".to_string());
//! }
//! planner
//!     .replace_sprint_state(&ReplaceSprintState {
//!         id: sprint.id().to_string(),
//!         state: Some(state),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod defaults;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod validation;

// Re-export commonly used types
pub use db::Database;
pub use defaults::build_default_state;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, Projects, SprintSummaries, UpdateResult,
};
pub use error::{Result, SprintboardError};
pub use models::{PlanningDocument, Project, ProjectStatus, Sprint, SprintSummary};
pub use params::{
    CreateProject, CreateSprint, Id, ListSprints, ReplaceSprintState, UpdateProject,
    ValidateState,
};
pub use planner::{Planner, PlannerBuilder};
pub use validation::{
    validate_create_sprint_request, validate_document_json, validate_project, validate_state,
    Validation, Violation, ViolationKind,
};
