//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::DateRange;
use crate::models::{Project, SprintSummary};

/// Newtype wrapper for displaying a list of projects.
///
/// # Examples
///
/// ```rust
/// use sprintboard_core::{display::Projects, models::Project};
///
/// let projects = Projects(vec![Project::placeholder("project-1")]);
/// let output = projects.to_string();
/// assert!(output.contains("Untitled project"));
///
/// assert_eq!(Projects(vec![]).to_string(), "No projects found.\n");
/// ```
pub struct Projects(pub Vec<Project>);

impl Projects {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No projects found.");
        }

        for project in &self.0 {
            // One compact section per project; the full view is `show`
            writeln!(f, "## {} (ID: {})", project.name, project.id)?;
            writeln!(f)?;
            writeln!(
                f,
                "- **Status**: {}",
                project.status.as_deref().unwrap_or("-")
            )?;
            writeln!(
                f,
                "- **Dates**: {}",
                DateRange(project.start_date.as_deref(), project.end_date.as_deref())
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the sprints of a project.
pub struct SprintSummaries(pub Vec<SprintSummary>);

impl SprintSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SprintSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No sprints found.");
        }
        for sprint in &self.0 {
            write!(f, "{sprint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_empty_collections_say_so() {
        assert!(Projects(vec![]).is_empty());
        assert_eq!(SprintSummaries(vec![]).to_string(), "No sprints found.\n");
    }

    #[test]
    fn test_sprint_summaries_list_each_sprint() {
        let summary = |id: &str, title: &str| SprintSummary {
            id: id.to_string(),
            project_id: "project-1".to_string(),
            title: Some(title.to_string()),
            start_date: None,
            end_date: None,
            status: Some("editing".to_string()),
            updated_at: Timestamp::UNIX_EPOCH,
        };
        let sprints = SprintSummaries(vec![summary("sprint-1", "One"), summary("sprint-2", "Two")]);

        assert!(!sprints.is_empty());
        let output = sprints.to_string();
        assert!(output.contains("sprint-1"));
        assert!(output.contains("sprint-2"));
    }
}
