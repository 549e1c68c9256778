//! Display implementations for domain models.
//!
//! Markdown output shared by the terminal renderer and the MCP server.

use std::fmt;

use super::datetime::{DateRange, LocalDateTime};
use crate::models::{Project, Sprint, SprintSummary, TaskItem};

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.as_deref().unwrap_or("-"))?;
        writeln!(
            f,
            "- Dates: {}",
            DateRange(self.start_date.as_deref(), self.end_date.as_deref())
        )?;
        if let Some(updated_at) = &self.updated_at {
            writeln!(f, "- Updated: {}", LocalDateTime(updated_at))?;
        }

        if let Some(desc) = self.description.as_deref().filter(|d| !d.trim().is_empty()) {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for SprintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {})",
            self.title.as_deref().unwrap_or("(untitled)"),
            self.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Project**: {}", self.project_id)?;
        writeln!(
            f,
            "- **Dates**: {}",
            DateRange(self.start_date.as_deref(), self.end_date.as_deref())
        )?;
        if let Some(status) = &self.status {
            writeln!(f, "- **Lifecycle**: {status}")?;
        }
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

fn fmt_task(task: &TaskItem, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "- **{}** {} ({} SP",
        task.id.as_deref().unwrap_or("?"),
        task.name.as_deref().unwrap_or(""),
        task.story_points
    )?;
    if let Some(assignee) = &task.assignee_member_name {
        write!(f, ", {assignee}")?;
    }
    write!(f, ")")?;
    if !task.dependencies.is_empty() {
        write!(f, " after {}", task.dependencies.join(", "))?;
    }
    writeln!(f)
}

impl fmt::Display for Sprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = &self.meta;
        writeln!(
            f,
            "# {} (ID: {})",
            meta.title.as_deref().unwrap_or("(untitled)"),
            meta.id
        )?;
        writeln!(f)?;
        writeln!(f, "- Project: {}", meta.project_id)?;
        writeln!(
            f,
            "- Dates: {}",
            DateRange(meta.start_date.as_deref(), meta.end_date.as_deref())
        )?;
        writeln!(f, "- Lifecycle: {}", meta.status.as_deref().unwrap_or("-"))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&meta.updated_at))?;
        writeln!(f, "- Events: {}", self.state.event_items().len())?;

        let members: Vec<_> = self.state.member_items().iter().flatten().collect();
        if !members.is_empty() {
            writeln!(f, "\n## Members")?;
            writeln!(f)?;
            for member in members {
                writeln!(
                    f,
                    "- {} ({}, {}%)",
                    member.name.as_deref().unwrap_or("?"),
                    member.role_type.as_deref().unwrap_or("?"),
                    member.availability_percent
                )?;
            }
        }

        let tasks: Vec<_> = self.state.task_items().iter().flatten().collect();
        if tasks.is_empty() {
            writeln!(f, "\nNo tasks in this sprint.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in tasks {
                fmt_task(task, f)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::build_default_state;

    #[test]
    fn test_project_display() {
        let project = Project {
            id: "project-1".to_string(),
            name: "Apollo".to_string(),
            start_date: Some("2025-01-06".to_string()),
            end_date: None,
            description: Some("Moonshot".to_string()),
            status: Some("active".to_string()),
            updated_at: None,
        };

        let output = project.to_string();
        assert!(output.starts_with("# Apollo (ID: project-1)"));
        assert!(output.contains("- Status: active"));
        assert!(output.contains("- Dates: 2025-01-06 → ?"));
        assert!(output.ends_with("Moonshot\n"));
    }

    #[test]
    fn test_sprint_display_lists_tasks() {
        let mut state = build_default_state(Some("Sprint 3"));
        state.tasks_mut().items.push(Some(TaskItem {
            id: Some("T2".to_string()),
            name: Some("Ship it".to_string()),
            story_points: 3.0,
            dependencies: vec!["T1".to_string()],
            ..Default::default()
        }));
        let meta = SprintSummary::from_document(
            "sprint-1".to_string(),
            "project-1".to_string(),
            &state,
            Timestamp::UNIX_EPOCH,
        );

        let output = Sprint { meta, state }.to_string();
        assert!(output.starts_with("# Sprint 3 (ID: sprint-1)"));
        assert!(output.contains("- Dates: undated"));
        assert!(output.contains("- Lifecycle: editing"));
        assert!(output.contains("- **T2** Ship it (3 SP) after T1"));
    }

    #[test]
    fn test_empty_sprint_says_so() {
        let state = build_default_state(None);
        let meta = SprintSummary::from_document(
            "sprint-2".to_string(),
            "project-1".to_string(),
            &state,
            Timestamp::UNIX_EPOCH,
        );
        let output = Sprint { meta, state }.to_string();
        assert!(output.contains("Untitled sprint"));
        assert!(output.contains("No tasks in this sprint."));
    }
}
