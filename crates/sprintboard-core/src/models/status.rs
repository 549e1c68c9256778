//! Project status enumeration.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed set of project statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Project is being set up
    Draft,

    /// Project is in use
    #[default]
    Active,

    /// Project is kept for reference only
    Archived,
}

impl FromStr for ProjectStatus {
    type Err = String;

    /// Matches the stored spelling exactly; `"Active"` is not a status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProjectStatus::Draft),
            "active" => Ok(ProjectStatus::Active),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(format!("Invalid project status: {s}")),
        }
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Active => "active",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
