mod common;

use sprintboard_core::{
    models::{EventItem, Member, MemberEvent, TaskItem},
    params::{CreateProject, CreateSprint, Id, ListSprints, ReplaceSprintState, UpdateProject},
    PlannerBuilder, SprintboardError, ViolationKind,
};
use tempfile::TempDir;

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_sprint_workflow() {
    let (_temp_dir, planner) = common::create_test_planner().await;

    let project = planner
        .create_project(&CreateProject {
            name: Some("Checkout revamp".to_string()),
            start_date: Some("2025-03-01".to_string()),
            end_date: Some("2025-06-30".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create project");

    let sprint = planner
        .create_sprint(&CreateSprint {
            project_id: Some(project.id.clone()),
            title: Some("Sprint 1".to_string()),
        })
        .await
        .expect("Failed to create sprint");

    // Fill in the plan the way a client would
    let mut state = sprint.state.clone();
    if let Some(window) = state.sprint.as_mut() {
        window.start_date = Some("2025-03-03".to_string());
        window.end_date = Some("2025-03-14".to_string());
    }
    state.events_mut().items.push(Some(EventItem {
        id: Some("ev-daily".to_string()),
        event_type: Some("Daily".to_string()),
        date: Some("2025-03-03".to_string()),
        minutes: 15,
        recurring_daily: true,
        ..Default::default()
    }));
    state.members_mut().items.push(Some(Member {
        id: Some("m-1".to_string()),
        name: Some("Ana".to_string()),
        role_type: Some("Developer".to_string()),
        seniority: Some("Senior".to_string()),
        maturity: Some("Mature".to_string()),
        availability_percent: 80.0,
        use_advanced_availability: true,
        availability_events: vec![Some(MemberEvent {
            id: Some("me-1".to_string()),
            minutes: 240,
            description: Some("Dentist".to_string()),
        })],
    }));
    for (id, deps) in [("T1", vec![]), ("T2", vec!["T1".to_string()])] {
        state.tasks_mut().items.push(Some(TaskItem {
            id: Some(id.to_string()),
            name: Some(format!("Task {id}")),
            assignee_member_name: Some("Ana".to_string()),
            story_points: 3.0,
            dependencies: deps,
            ..Default::default()
        }));
    }

    let replaced = planner
        .replace_sprint_state(&ReplaceSprintState {
            id: sprint.id().to_string(),
            state: Some(state.clone()),
        })
        .await
        .expect("Failed to replace state");
    assert_eq!(replaced.meta.start_date.as_deref(), Some("2025-03-03"));

    let listed = planner
        .list_sprints(&ListSprints {
            project_id: project.id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].end_date.as_deref(), Some("2025-03-14"));

    let shown = planner
        .get_sprint(&Id {
            id: sprint.id().to_string(),
        })
        .await
        .unwrap();
    assert_eq!(shown.state, state);

    // Archive the project, then remove it with its sprint
    let archived = planner
        .update_project(&UpdateProject {
            id: project.id.clone(),
            status: Some("archived".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(archived.status.as_deref(), Some("archived"));
    assert_eq!(archived.start_date.as_deref(), Some("2025-03-01"));

    let deleted = planner
        .delete_project(&Id {
            id: project.id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(deleted.name, "Checkout revamp");
    assert!(matches!(
        planner
            .get_sprint(&Id {
                id: sprint.id().to_string()
            })
            .await,
        Err(SprintboardError::SprintNotFound { .. })
    ));
}

#[tokio::test]
async fn test_first_violation_is_reported() {
    let (_temp_dir, planner) = common::create_test_planner().await;
    let sprint = planner
        .create_sprint(&CreateSprint {
            project_id: Some("project-x".to_string()),
            title: None,
        })
        .await
        .unwrap();

    // Both a bad window and a bad member: the window is checked first
    let mut state = sprint.state.clone();
    if let Some(window) = state.sprint.as_mut() {
        window.start_date = Some("2025-03-14".to_string());
        window.end_date = Some("2025-03-03".to_string());
    }
    state.members_mut().items.push(Some(Member {
        name: Some("Bo".to_string()),
        role_type: Some("QA".to_string()),
        availability_percent: 150.0,
        ..Default::default()
    }));

    let err = planner
        .replace_sprint_state(&ReplaceSprintState {
            id: sprint.id().to_string(),
            state: Some(state),
        })
        .await
        .unwrap_err();
    let violation = err.violation().expect("validation error");
    assert_eq!(violation.kind, ViolationKind::Ordering);
    assert_eq!(
        violation.message,
        "Sprint start date cannot be after the end date."
    );
}

#[tokio::test]
async fn test_data_survives_planner_rebuild() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("sprintboard.db");

    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    let sprint = planner
        .create_sprint(&CreateSprint {
            project_id: Some("project-keep".to_string()),
            title: Some("Persistent".to_string()),
        })
        .await
        .unwrap();
    drop(planner);

    let reopened = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen planner");
    let shown = reopened
        .get_sprint(&Id {
            id: sprint.id().to_string(),
        })
        .await
        .unwrap();
    assert_eq!(shown, sprint);
}
