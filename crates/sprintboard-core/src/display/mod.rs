//! Display formatting for projects, sprints and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so the same data can
//! be formatted differently depending on context. Every formatter produces
//! markdown, which the CLI renders for the terminal and the MCP server returns
//! as text content.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │(Project, Sprint)│───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Projects, SprintSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use sprintboard_core::{display::OperationStatus, validate_state, build_default_state};
//!
//! let document = build_default_state(None);
//! let status = OperationStatus::from(&validate_state(Some(&document)));
//! assert!(status.success);
//! assert!(status.to_string().contains("Document is valid."));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Projects, SprintSummaries};
pub use datetime::{DateRange, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
