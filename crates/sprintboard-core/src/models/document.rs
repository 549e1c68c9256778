//! The planning document: the complete nested state of one sprint.
//!
//! Field names follow the JSON wire format (camelCase). Anything a client may
//! send as `null` is an `Option`, and lists accept `null` as empty, so that the
//! validators, not the deserializer, decide what is acceptable.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use super::{GlobalConfig, WorkingPeriod};

/// Deserializes `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a sprint's persisted state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanningDocument {
    pub sprint: Option<SprintWindow>,
    pub calendar: Option<CalendarState>,
    pub events: Option<ItemList<EventItem>>,
    pub members: Option<ItemList<Member>>,
    pub tasks: Option<ItemList<TaskItem>>,
    pub config: Option<ConfigState>,
    pub planning_lifecycle: Option<LifecycleState>,
}

impl PlanningDocument {
    /// Events in stored order; empty when the container is missing.
    pub fn event_items(&self) -> &[Option<EventItem>] {
        self.events.as_ref().map_or(&[], |list| &list.items)
    }

    /// Members in stored order; empty when the container is missing.
    pub fn member_items(&self) -> &[Option<Member>] {
        self.members.as_ref().map_or(&[], |list| &list.items)
    }

    /// Tasks in stored order; empty when the container is missing.
    pub fn task_items(&self) -> &[Option<TaskItem>] {
        self.tasks.as_ref().map_or(&[], |list| &list.items)
    }

    pub fn events_mut(&mut self) -> &mut ItemList<EventItem> {
        self.events.get_or_insert_with(ItemList::default)
    }

    pub fn members_mut(&mut self) -> &mut ItemList<Member> {
        self.members.get_or_insert_with(ItemList::default)
    }

    pub fn tasks_mut(&mut self) -> &mut ItemList<TaskItem> {
        self.tasks.get_or_insert_with(ItemList::default)
    }

    pub fn title(&self) -> Option<&str> {
        self.sprint.as_ref().and_then(|s| s.title.as_deref())
    }

    pub fn start_date(&self) -> Option<&str> {
        self.sprint.as_ref().and_then(|s| s.start_date.as_deref())
    }

    pub fn end_date(&self) -> Option<&str> {
        self.sprint.as_ref().and_then(|s| s.end_date.as_deref())
    }

    pub fn lifecycle_status(&self) -> Option<&str> {
        self.planning_lifecycle
            .as_ref()
            .and_then(|l| l.status.as_deref())
    }
}

/// The sprint's title and date window. Dates are ISO `YYYY-MM-DD` strings, or
/// both blank for an undated sprint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SprintWindow {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Manual calendar adjustments on top of the default working week.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalendarState {
    #[serde(default, deserialize_with = "nullable")]
    pub non_working_days_manual: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub non_working_days_removed: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub day_schedules: Vec<DaySchedule>,
}

/// Working periods for one specific day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_non_working: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub periods: Vec<WorkingPeriod>,
}

/// `{ "items": [...] }` wrapper used for events, members and tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemList<T> {
    #[serde(default = "Vec::<Option<T>>::new", deserialize_with = "nullable")]
    pub items: Vec<Option<T>>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Some).collect(),
        }
    }
}

/// A team-wide event (ceremony, meeting) that consumes capacity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub minutes: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub recurring_daily: bool,
}

/// A team member and their availability.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role_type: Option<String>,
    pub seniority: Option<String>,
    pub maturity: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub availability_percent: f64,
    /// When set, capacity comes from `availability_events` instead of the
    /// percentage alone
    #[serde(default, deserialize_with = "nullable")]
    pub use_advanced_availability: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub availability_events: Vec<Option<MemberEvent>>,
}

/// Time off or partial unavailability of a single member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct MemberEvent {
    pub id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub minutes: i64,
    pub description: Option<String>,
}

/// A unit of estimated work.
///
/// The `computed_*` fields are filled by the scheduler and carried through
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_member_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub story_points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbo_story_points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbo_enabled: Option<bool>,
    /// Ids of tasks that must finish first
    #[serde(default, deserialize_with = "nullable")]
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_timeline: Option<Vec<TaskWorkSegment>>,
}

/// A slice of a task scheduled on one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskWorkSegment {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<TaskWorkDetail>,
}

/// Capacity breakdown behind a [`TaskWorkSegment`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TaskWorkDetail {
    #[serde(deserialize_with = "nullable")]
    pub periods: Vec<WorkingPeriod>,
    #[serde(deserialize_with = "nullable")]
    pub base_minutes: i64,
    #[serde(deserialize_with = "nullable")]
    pub event_minutes: i64,
    #[serde(deserialize_with = "nullable")]
    pub recurring_minutes: i64,
    #[serde(deserialize_with = "nullable")]
    pub capacity_minutes: i64,
    #[serde(deserialize_with = "nullable")]
    pub availability_percent: f64,
    #[serde(deserialize_with = "nullable")]
    pub seniority_factor: f64,
    #[serde(deserialize_with = "nullable")]
    pub maturity_factor: f64,
    #[serde(deserialize_with = "nullable")]
    pub used_before_minutes: i64,
    #[serde(deserialize_with = "nullable")]
    pub events: Vec<TaskWorkEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskWorkEvent {
    pub label: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub minutes: i64,
}

/// `{ "value": {...} }` wrapper around the sprint's configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ConfigState {
    pub value: Option<GlobalConfig>,
}

/// Coarse workflow state of the planning document.
///
/// Known values are [`LifecycleState::EDITING`], [`LifecycleState::FOLLOW_UP`]
/// and [`LifecycleState::CLOSED`]; any other string is stored as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct LifecycleState {
    pub status: Option<String>,
    pub closed_at: Option<String>,
}

impl LifecycleState {
    pub const EDITING: &'static str = "editing";
    pub const FOLLOW_UP: &'static str = "followup";
    pub const CLOSED: &'static str = "closed";

    /// A fresh, open lifecycle.
    pub fn editing() -> Self {
        Self {
            status: Some(Self::EDITING.to_string()),
            closed_at: None,
        }
    }
}
