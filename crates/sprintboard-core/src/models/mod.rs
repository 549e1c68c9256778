//! Data models for projects, sprints and planning documents.
//!
//! All models are plain serde value types with no back-references: a
//! [`Sprint`] knows its project by id, and nothing inside a
//! [`PlanningDocument`] points at its parent. Display implementations live in
//! [`crate::display::models`].
//!
//! ```text
//! Project ──< Sprint ── PlanningDocument
//!                         ├─ sprint        SprintWindow
//!                         ├─ calendar      CalendarState
//!                         ├─ events        { items: [EventItem] }
//!                         ├─ members       { items: [Member] }
//!                         ├─ tasks         { items: [TaskItem] }
//!                         ├─ config        { value: GlobalConfig }
//!                         └─ planningLifecycle
//! ```

pub mod config;
pub mod document;
pub mod project;
pub mod sprint;
pub mod status;


pub use config::{GlobalConfig, WorkingPeriod, STRATEGY_EARLIEST_DUE_DATE};
pub use document::{
    CalendarState, ConfigState, DaySchedule, EventItem, ItemList, LifecycleState, Member,
    MemberEvent, PlanningDocument, SprintWindow, TaskItem, TaskWorkDetail, TaskWorkEvent,
    TaskWorkSegment,
};
pub use project::{Project, UNTITLED_PROJECT};
pub use sprint::{Sprint, SprintSummary};
pub use status::ProjectStatus;
