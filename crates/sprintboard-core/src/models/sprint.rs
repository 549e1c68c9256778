//! Sprint records: listing summary plus the full planning document.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::PlanningDocument;

/// Listing record for a sprint.
///
/// Title, dates and status are copies of the document's window and lifecycle
/// taken at the last write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintSummary {
    /// Unique identifier (`sprint-<uuid>`)
    pub id: String,

    /// Owning project
    pub project_id: String,

    pub title: Option<String>,

    pub start_date: Option<String>,

    pub end_date: Option<String>,

    /// Lifecycle status of the document (`editing`, `followup`, `closed`, ...)
    pub status: Option<String>,

    /// Timestamp of the last write (UTC)
    pub updated_at: Timestamp,
}

impl SprintSummary {
    /// Derives the listing fields from a document.
    pub fn from_document(
        id: String,
        project_id: String,
        document: &PlanningDocument,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            title: document.title().map(String::from),
            start_date: document.start_date().map(String::from),
            end_date: document.end_date().map(String::from),
            status: document.lifecycle_status().map(String::from),
            updated_at,
        }
    }
}

/// A sprint with its complete planning document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sprint {
    pub meta: SprintSummary,
    pub state: PlanningDocument,
}

impl Sprint {
    pub fn id(&self) -> &str {
        &self.meta.id
    }
}
