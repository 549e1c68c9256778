//! Sprint CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{json_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{PlanningDocument, Sprint, SprintSummary},
};

const INSERT_SPRINT_SQL: &str = "INSERT INTO sprints (id, project_id, title, start_date, end_date, status, updated_at, revision, state) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, (SELECT COALESCE(MAX(revision), 0) + 1 FROM sprints), ?8)";
const SELECT_SPRINT_SQL: &str = "SELECT id, project_id, title, start_date, end_date, status, updated_at, state FROM sprints WHERE id = ?1";
const CHECK_SPRINT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM sprints WHERE id = ?1)";
const SELECT_SPRINT_PROJECT_SQL: &str = "SELECT project_id FROM sprints WHERE id = ?1";
const LIST_SPRINTS_SQL: &str = "SELECT id, project_id, title, start_date, end_date, status, updated_at FROM sprints WHERE project_id = ?1 ORDER BY revision DESC";
const UPDATE_SPRINT_STATE_SQL: &str = "UPDATE sprints SET title = ?1, start_date = ?2, end_date = ?3, status = ?4, updated_at = ?5, revision = (SELECT MAX(revision) + 1 FROM sprints), state = ?6 WHERE id = ?7";
const DELETE_SPRINT_SQL: &str = "DELETE FROM sprints WHERE id = ?1";

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SprintSummary> {
    Ok(SprintSummary {
        id: row.get(0)?,
        project_id: row.get(1)?,
        title: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        status: row.get(5)?,
        updated_at: timestamp_column(row, 6)?,
    })
}

fn sprint_from_row(row: &Row<'_>) -> rusqlite::Result<Sprint> {
    Ok(Sprint {
        meta: summary_from_row(row)?,
        state: json_column(row, 7)?,
    })
}

impl super::Database {
    /// Stores a new sprint under an existing project.
    ///
    /// Summary columns are copied from the document's window and lifecycle.
    pub fn insert_sprint(
        &mut self,
        id: &str,
        project_id: &str,
        state: &PlanningDocument,
    ) -> Result<Sprint> {
        let now = Timestamp::now();
        let meta = SprintSummary::from_document(id.to_string(), project_id.to_string(), state, now);
        let state_json = serde_json::to_string(state)?;

        self.connection
            .execute(
                INSERT_SPRINT_SQL,
                params![
                    meta.id,
                    meta.project_id,
                    meta.title,
                    meta.start_date,
                    meta.end_date,
                    meta.status,
                    now.to_string(),
                    state_json,
                ],
            )
            .db_context("Failed to insert sprint")?;

        Ok(Sprint {
            meta,
            state: state.clone(),
        })
    }

    /// Retrieves a sprint and its planning document by ID.
    pub fn get_sprint(&self, id: &str) -> Result<Option<Sprint>> {
        self.connection
            .query_row(SELECT_SPRINT_SQL, params![id], sprint_from_row)
            .optional()
            .db_context("Failed to query sprint")
    }

    /// Returns whether a sprint with the given ID exists.
    pub fn sprint_exists(&self, id: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_SPRINT_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check sprint existence")
    }

    /// Lists the sprint summaries of one project, most recently updated first.
    pub fn list_sprints(&self, project_id: &str) -> Result<Vec<SprintSummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SPRINTS_SQL)
            .db_context("Failed to prepare sprint listing")?;

        let sprints = stmt
            .query_map(params![project_id], summary_from_row)
            .db_context("Failed to query sprints")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read sprint row")?;

        Ok(sprints)
    }

    /// Replaces a sprint's whole planning document and refreshes its summary
    /// columns from it.
    ///
    /// Returns `None` when no sprint has the given ID.
    pub fn replace_sprint_state(
        &mut self,
        id: &str,
        state: &PlanningDocument,
    ) -> Result<Option<Sprint>> {
        let state_json = serde_json::to_string(state)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let project_id: Option<String> = tx
            .query_row(SELECT_SPRINT_PROJECT_SQL, params![id], |row| row.get(0))
            .optional()
            .db_context("Failed to query sprint")?;

        let Some(project_id) = project_id else {
            return Ok(None);
        };

        let now = Timestamp::now();
        let meta = SprintSummary::from_document(id.to_string(), project_id, state, now);

        tx.execute(
            UPDATE_SPRINT_STATE_SQL,
            params![
                meta.title,
                meta.start_date,
                meta.end_date,
                meta.status,
                now.to_string(),
                state_json,
                meta.id,
            ],
        )
        .db_context("Failed to update sprint state")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(Sprint {
            meta,
            state: state.clone(),
        }))
    }

    /// Deletes a sprint. Returns `false` when no sprint had the given ID.
    pub fn delete_sprint(&mut self, id: &str) -> Result<bool> {
        let rows = self
            .connection
            .execute(DELETE_SPRINT_SQL, params![id])
            .db_context("Failed to delete sprint")?;

        Ok(rows > 0)
    }
}
