//! Project operations for the Planner.

use log::{debug, info, warn};

use super::Planner;
use crate::{
    db::utils::{new_id, PROJECT_ID_PREFIX},
    error::{Result, SprintboardError},
    models::Project,
    params::{CreateProject, Id, UpdateProject},
    validation::validate_project,
};

impl Planner {
    /// Lists all projects, most recently updated first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.with_database(|db| db.list_projects()).await
    }

    /// Retrieves a project by its ID.
    ///
    /// # Errors
    ///
    /// Returns `SprintboardError::ProjectNotFound` when no project has the ID.
    pub async fn get_project(&self, params: &Id) -> Result<Project> {
        let id = params.id.clone();
        debug!("get_project: {id}");

        self.with_database(move |db| {
            db.get_project(&id)?
                .ok_or(SprintboardError::ProjectNotFound { id })
        })
        .await
    }

    /// Creates a project.
    ///
    /// The submitted status is validated as given; afterwards a blank name
    /// becomes "Untitled project" and a blank status becomes `active`.
    pub async fn create_project(&self, params: &CreateProject) -> Result<Project> {
        let candidate = Project::from(params);
        if let Err(violation) = validate_project(Some(&candidate)) {
            warn!("Rejected project: {violation}");
            return Err(violation.into());
        }

        let project = Project {
            id: new_id(PROJECT_ID_PREFIX),
            ..candidate.with_creation_defaults()
        };

        let created = self.with_database(move |db| db.insert_project(&project)).await?;
        info!("Created project {}", created.id);
        Ok(created)
    }

    /// Updates a project, keeping stored values for fields the request
    /// leaves out. See [`Project::merged_with`] for the per-field rules.
    ///
    /// # Errors
    ///
    /// Returns `SprintboardError::ProjectNotFound` when no project has the ID,
    /// or `SprintboardError::Validation` when the submitted status is unknown.
    pub async fn update_project(&self, params: &UpdateProject) -> Result<Project> {
        let candidate = Project::from(params);

        self.with_database(move |db| {
            let existing = db
                .get_project(&candidate.id)?
                .ok_or_else(|| SprintboardError::ProjectNotFound {
                    id: candidate.id.clone(),
                })?;

            if let Err(violation) = validate_project(Some(&candidate)) {
                warn!("Rejected update of project {}: {violation}", existing.id);
                return Err(violation.into());
            }

            let merged = candidate.merged_with(&existing);
            let updated = db
                .replace_project(&merged)?
                .ok_or_else(|| SprintboardError::ProjectNotFound {
                    id: merged.id.clone(),
                })?;

            info!("Updated project {}", updated.id);
            Ok(updated)
        })
        .await
    }

    /// Deletes a project and every sprint it owns, returning the deleted
    /// project.
    pub async fn delete_project(&self, params: &Id) -> Result<Project> {
        let id = params.id.clone();

        self.with_database(move |db| {
            let project = db
                .get_project(&id)?
                .ok_or_else(|| SprintboardError::ProjectNotFound { id: id.clone() })?;
            if !db.delete_project(&id)? {
                return Err(SprintboardError::ProjectNotFound { id });
            }
            info!("Deleted project {id} and its sprints");
            Ok(project)
        })
        .await
    }
}
