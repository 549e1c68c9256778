//! Project CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::timestamp_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::Project,
};

const INSERT_PROJECT_SQL: &str = "INSERT INTO projects (id, name, start_date, end_date, description, status, updated_at, revision) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, (SELECT COALESCE(MAX(revision), 0) + 1 FROM projects))";
const SELECT_PROJECT_SQL: &str = "SELECT id, name, start_date, end_date, description, status, updated_at FROM projects WHERE id = ?1";
const LIST_PROJECTS_SQL: &str = "SELECT id, name, start_date, end_date, description, status, updated_at FROM projects ORDER BY revision DESC";
const CHECK_PROJECT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM projects WHERE id = ?1)";
const UPDATE_PROJECT_SQL: &str = "UPDATE projects SET name = ?1, start_date = ?2, end_date = ?3, description = ?4, status = ?5, updated_at = ?6, revision = (SELECT MAX(revision) + 1 FROM projects) WHERE id = ?7";
const DELETE_PROJECT_SPRINTS_SQL: &str = "DELETE FROM sprints WHERE project_id = ?1";
const DELETE_PROJECT_SQL: &str = "DELETE FROM projects WHERE id = ?1";

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        description: row.get(4)?,
        status: row.get(5)?,
        updated_at: Some(timestamp_column(row, 6)?),
    })
}

impl super::Database {
    /// Inserts a new project row, stamping it with the current time.
    ///
    /// The caller supplies the id; the returned project carries the stored
    /// timestamp.
    pub fn insert_project(&mut self, project: &Project) -> Result<Project> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_PROJECT_SQL,
                params![
                    project.id,
                    project.name,
                    project.start_date,
                    project.end_date,
                    project.description,
                    project.status,
                    now.to_string(),
                ],
            )
            .db_context("Failed to insert project")?;

        Ok(Project {
            updated_at: Some(now),
            ..project.clone()
        })
    }

    /// Retrieves a project by its ID.
    pub fn get_project(&self, id: &str) -> Result<Option<Project>> {
        self.connection
            .query_row(SELECT_PROJECT_SQL, params![id], project_from_row)
            .optional()
            .db_context("Failed to query project")
    }

    /// Lists all projects, most recently updated first.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PROJECTS_SQL)
            .db_context("Failed to prepare project listing")?;

        let projects = stmt
            .query_map([], project_from_row)
            .db_context("Failed to query projects")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read project row")?;

        Ok(projects)
    }

    /// Returns whether a project with the given ID exists.
    pub fn project_exists(&self, id: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_PROJECT_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check project existence")
    }

    /// Overwrites every mutable column of a stored project.
    ///
    /// Returns `None` when no project has the given ID.
    pub fn replace_project(&mut self, project: &Project) -> Result<Option<Project>> {
        let now = Timestamp::now();

        let rows = self
            .connection
            .execute(
                UPDATE_PROJECT_SQL,
                params![
                    project.name,
                    project.start_date,
                    project.end_date,
                    project.description,
                    project.status,
                    now.to_string(),
                    project.id,
                ],
            )
            .db_context("Failed to update project")?;

        if rows == 0 {
            return Ok(None);
        }

        Ok(Some(Project {
            updated_at: Some(now),
            ..project.clone()
        }))
    }

    /// Deletes a project together with all of its sprints.
    ///
    /// Returns `false` when no project had the given ID.
    pub fn delete_project(&mut self, id: &str) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_PROJECT_SPRINTS_SQL, params![id])
            .db_context("Failed to delete project sprints")?;

        let rows = tx
            .execute(DELETE_PROJECT_SQL, params![id])
            .db_context("Failed to delete project")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(rows > 0)
    }
}
