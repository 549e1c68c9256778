//! Project model and the rules for filling in and merging its fields.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ProjectStatus;
use crate::validation::is_blank;

/// Name given to projects created without one.
pub const UNTITLED_PROJECT: &str = "Untitled project";

/// A project owning zero or more sprints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (`project-<uuid>`); empty on unsaved candidates
    pub id: String,

    pub name: String,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    pub description: Option<String>,

    /// One of `draft`, `active`, `archived` once validated
    pub status: Option<String>,

    /// Timestamp of the last write (UTC); `None` until saved
    pub updated_at: Option<Timestamp>,
}

impl Project {
    /// The project created implicitly when a sprint names an unknown project.
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: UNTITLED_PROJECT.to_string(),
            start_date: None,
            end_date: None,
            description: None,
            status: Some(ProjectStatus::Active.as_str().to_string()),
            updated_at: None,
        }
    }

    /// Parsed status, if present and known.
    pub fn parsed_status(&self) -> Option<ProjectStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// Fills the fields a freshly created project must have: a blank name
    /// becomes [`UNTITLED_PROJECT`] and a blank status becomes `active`.
    pub fn with_creation_defaults(mut self) -> Self {
        if self.name.trim().is_empty() {
            self.name = UNTITLED_PROJECT.to_string();
        }
        if is_blank(self.status.as_deref()) {
            self.status = Some(ProjectStatus::Active.as_str().to_string());
        }
        self
    }

    /// Combines a submitted update with the stored project.
    ///
    /// Precedence per field:
    ///
    /// | field | submitted wins when | otherwise |
    /// |---|---|---|
    /// | `name` | non-blank | existing name |
    /// | `description`, `start_date`, `end_date` | present (even if blank) | existing value |
    /// | `status` | non-blank | existing status, or `active` if none |
    ///
    /// The id always comes from `existing`; `updated_at` is left to the caller.
    pub fn merged_with(self, existing: &Project) -> Project {
        let name = if self.name.trim().is_empty() {
            existing.name.clone()
        } else {
            self.name
        };
        let status = if is_blank(self.status.as_deref()) {
            Some(
                existing
                    .status
                    .clone()
                    .unwrap_or_else(|| ProjectStatus::Active.as_str().to_string()),
            )
        } else {
            self.status
        };

        Project {
            id: existing.id.clone(),
            name,
            start_date: self.start_date.or_else(|| existing.start_date.clone()),
            end_date: self.end_date.or_else(|| existing.end_date.clone()),
            description: self.description.or_else(|| existing.description.clone()),
            status,
            updated_at: existing.updated_at,
        }
    }
}

impl From<&crate::params::CreateProject> for Project {
    /// Builds an unsaved candidate from creation parameters.
    fn from(params: &crate::params::CreateProject) -> Self {
        Self {
            id: String::new(),
            name: params.name.clone().unwrap_or_default(),
            start_date: params.start_date.clone(),
            end_date: params.end_date.clone(),
            description: params.description.clone(),
            status: params.status.clone(),
            updated_at: None,
        }
    }
}

impl From<&crate::params::UpdateProject> for Project {
    /// Builds an unsaved candidate from update parameters.
    fn from(params: &crate::params::UpdateProject) -> Self {
        Self {
            id: params.id.clone(),
            name: params.name.clone().unwrap_or_default(),
            start_date: params.start_date.clone(),
            end_date: params.end_date.clone(),
            description: params.description.clone(),
            status: params.status.clone(),
            updated_at: None,
        }
    }
}
