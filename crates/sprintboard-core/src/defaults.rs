//! Canonical starting state for new sprints.

use crate::{
    models::{
        CalendarState, ConfigState, GlobalConfig, ItemList, LifecycleState, PlanningDocument,
        SprintWindow,
    },
    validation::is_blank,
};

/// Title given to sprints created without one.
pub const UNTITLED_SPRINT: &str = "Untitled sprint";

/// Builds the document every new sprint starts with.
///
/// The title is kept when non-blank and replaced by [`UNTITLED_SPRINT`]
/// otherwise. Dates are blank, every list is empty, the configuration is
/// [`GlobalConfig::default_config`] and the lifecycle is `editing`. The result
/// always passes [`crate::validate_state`].
///
/// # Examples
///
/// ```rust
/// use sprintboard_core::{build_default_state, defaults::UNTITLED_SPRINT};
///
/// let document = build_default_state(Some("Sprint 7"));
/// assert_eq!(document.title(), Some("Sprint 7"));
///
/// let untitled = build_default_state(Some("   "));
/// assert_eq!(untitled.title(), Some(UNTITLED_SPRINT));
/// ```
pub fn build_default_state(title: Option<&str>) -> PlanningDocument {
    let title = match title {
        Some(title) if !is_blank(Some(title)) => title,
        _ => UNTITLED_SPRINT,
    };

    PlanningDocument {
        sprint: Some(SprintWindow {
            title: Some(title.to_string()),
            start_date: Some(String::new()),
            end_date: Some(String::new()),
        }),
        calendar: Some(CalendarState::default()),
        events: Some(ItemList::default()),
        members: Some(ItemList::default()),
        tasks: Some(ItemList::default()),
        config: Some(ConfigState {
            value: Some(GlobalConfig::default_config().clone()),
        }),
        planning_lifecycle: Some(LifecycleState::editing()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_state;

    #[test]
    fn test_default_state_keeps_title() {
        let document = build_default_state(Some("Sprint 12"));
        assert_eq!(document.title(), Some("Sprint 12"));
    }

    #[test]
    fn test_default_state_placeholder_title() {
        for title in [None, Some(""), Some("  \t")] {
            let document = build_default_state(title);
            assert_eq!(document.title(), Some(UNTITLED_SPRINT));
        }
    }

    #[test]
    fn test_default_state_shape() {
        let document = build_default_state(None);

        assert_eq!(document.start_date(), Some(""));
        assert_eq!(document.end_date(), Some(""));
        assert!(document.event_items().is_empty());
        assert!(document.member_items().is_empty());
        assert!(document.task_items().is_empty());

        let calendar = document.calendar.as_ref().unwrap();
        assert!(calendar.non_working_days_manual.is_empty());
        assert!(calendar.day_schedules.is_empty());

        let config = document.config.as_ref().and_then(|c| c.value.as_ref()).unwrap();
        assert_eq!(config, GlobalConfig::default_config());

        let lifecycle = document.planning_lifecycle.as_ref().unwrap();
        assert_eq!(lifecycle.status.as_deref(), Some(LifecycleState::EDITING));
        assert!(lifecycle.closed_at.is_none());
    }

    #[test]
    fn test_default_state_is_always_valid() {
        for title in [None, Some(""), Some("Sprint 1"), Some("  "), Some("Ünïcødé ✓")] {
            let document = build_default_state(title);
            assert_eq!(validate_state(Some(&document)), Ok(()));
        }
    }

    #[test]
    fn test_default_state_wire_format() {
        let json = serde_json::to_value(build_default_state(Some("Wire"))).unwrap();
        assert_eq!(json["sprint"]["title"], "Wire");
        assert_eq!(json["sprint"]["startDate"], "");
        assert_eq!(json["events"]["items"], serde_json::json!([]));
        assert_eq!(json["config"]["value"]["storyPointsPerHour"], 0.33);
        assert_eq!(json["planningLifecycle"]["status"], "editing");
        assert!(json["planningLifecycle"]["closedAt"].is_null());
    }
}
