//! Planning document validators.

use std::collections::HashSet;

use jiff::civil::Date;

use super::{is_blank, reject, Validation, Violation, ViolationKind};
use crate::models::{EventItem, Member, PlanningDocument, SprintWindow, TaskItem};

/// Validates a whole planning document, stopping at the first violation.
///
/// The window is checked first, then events, members and tasks in their
/// stored order. Missing containers and lists count as empty. The lifecycle
/// block and the configuration are never inspected.
pub fn validate_state(document: Option<&PlanningDocument>) -> Validation {
    let Some(document) = document else {
        return Err(Violation::missing("Sprint state is required."));
    };

    validate_sprint_window(document.sprint.as_ref())?;

    for event in document.event_items() {
        validate_event(event.as_ref())?;
    }

    for member in document.member_items() {
        validate_member(member.as_ref())?;
    }

    let mut seen_ids = HashSet::new();
    for task in document.task_items() {
        validate_task(task.as_ref(), &mut seen_ids)?;
    }

    Ok(())
}

/// Both dates blank is a valid, undated sprint. Otherwise both must be ISO
/// calendar dates with start on or before end.
pub fn validate_sprint_window(window: Option<&SprintWindow>) -> Validation {
    let Some(window) = window else {
        return Err(Violation::missing("Sprint is required."));
    };

    let start = window.start_date.as_deref();
    let end = window.end_date.as_deref();
    match (is_blank(start), is_blank(end)) {
        (true, true) => return Ok(()),
        (false, false) => {}
        _ => return Err(Violation::missing("Sprint start and end dates are required.")),
    }

    let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
        return reject(
            ViolationKind::Malformed,
            "Sprint dates must be ISO dates (YYYY-MM-DD).",
        );
    };
    if start > end {
        return reject(
            ViolationKind::Ordering,
            "Sprint start date cannot be after the end date.",
        );
    }
    Ok(())
}

pub fn validate_event(event: Option<&EventItem>) -> Validation {
    let Some(event) = event else {
        return Err(Violation::missing("Event is required."));
    };
    if is_blank(event.date.as_deref()) {
        return Err(Violation::missing("Event date is required."));
    }
    if event.minutes <= 0 {
        return reject(
            ViolationKind::OutOfRange,
            "Event minutes must be a number greater than zero.",
        );
    }
    Ok(())
}

/// Availability events are only checked when the member is in advanced
/// availability mode.
pub fn validate_member(member: Option<&Member>) -> Validation {
    let Some(member) = member else {
        return Err(Violation::missing("Member is required."));
    };
    if is_blank(member.name.as_deref()) {
        return Err(Violation::missing("Member name is required."));
    }
    if is_blank(member.role_type.as_deref()) {
        return Err(Violation::missing("Member role type is required."));
    }

    let availability = member.availability_percent;
    if availability.is_nan() || !(0.0..=100.0).contains(&availability) {
        return reject(
            ViolationKind::OutOfRange,
            "Availability must be between 0 and 100.",
        );
    }

    if member.use_advanced_availability {
        if member.availability_events.is_empty() {
            return Err(Violation::missing(
                "Add at least one availability event or disable advanced availability.",
            ));
        }
        let has_bad_event = member
            .availability_events
            .iter()
            .any(|event| event.as_ref().map_or(true, |e| e.minutes <= 0));
        if has_bad_event {
            return reject(
                ViolationKind::OutOfRange,
                "Availability event duration must be greater than zero (minutes).",
            );
        }
    }
    Ok(())
}

/// Checks one task against the ids already seen in the same pass.
///
/// The task's id is recorded in `seen_ids` once it is known to be unique,
/// before the dependency check runs.
pub fn validate_task(task: Option<&TaskItem>, seen_ids: &mut HashSet<String>) -> Validation {
    let Some(task) = task else {
        return Err(Violation::missing("Task is required."));
    };
    let id = match task.id.as_deref() {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(Violation::missing("Task ID is required.")),
    };
    if is_blank(task.name.as_deref()) {
        return Err(Violation::missing("Task name is required."));
    }
    if task.story_points.is_nan() {
        return reject(ViolationKind::Malformed, "Story points must be numeric.");
    }
    if !seen_ids.insert(id.to_string()) {
        return reject(ViolationKind::Uniqueness, "Task ID already exists.");
    }
    if task.dependencies.iter().any(|dep| dep == id) {
        return reject(
            ViolationKind::Referential,
            "A task cannot depend on itself.",
        );
    }
    Ok(())
}

/// Parses a plain `YYYY-MM-DD` calendar date.
///
/// Times, offsets, annotations, the basic format and signed years are all
/// rejected.
fn parse_date(value: Option<&str>) -> Option<Date> {
    let value = value?;
    let strict_shape = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !strict_shape {
        return None;
    }
    Date::strptime("%Y-%m-%d", value).ok()
}
