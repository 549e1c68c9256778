//! Sprint operations for the Planner.

use log::{debug, info, warn};

use super::Planner;
use crate::{
    db::utils::{new_id, SPRINT_ID_PREFIX},
    defaults::build_default_state,
    error::{Result, SprintboardError},
    models::{Project, Sprint, SprintSummary},
    params::{CreateSprint, Id, ListSprints, ReplaceSprintState},
    validation::{validate_create_sprint_request, validate_project, validate_state, Violation},
};

impl Planner {
    /// Lists the sprints of one project, most recently updated first.
    ///
    /// An unknown project simply has no sprints.
    pub async fn list_sprints(&self, params: &ListSprints) -> Result<Vec<SprintSummary>> {
        let project_id = params.project_id.clone();
        self.with_database(move |db| db.list_sprints(&project_id)).await
    }

    /// Retrieves a sprint with its full planning document.
    ///
    /// # Errors
    ///
    /// Returns `SprintboardError::SprintNotFound` when no sprint has the ID.
    pub async fn get_sprint(&self, params: &Id) -> Result<Sprint> {
        let id = params.id.clone();
        debug!("get_sprint: {id}");

        self.with_database(move |db| {
            db.get_sprint(&id)?
                .ok_or(SprintboardError::SprintNotFound { id })
        })
        .await
    }

    /// Creates a sprint holding the default planning document.
    ///
    /// A project id is mandatory. When no project has that id, a placeholder
    /// project ("Untitled project", `active`) is created under it first.
    pub async fn create_sprint(&self, params: &CreateSprint) -> Result<Sprint> {
        if let Err(violation) = validate_create_sprint_request(params.project_id.as_deref()) {
            warn!("Rejected sprint creation: {violation}");
            return Err(violation.into());
        }
        let project_id = params.project_id.clone().unwrap_or_default();

        let state = build_default_state(params.title.as_deref());
        validate_state(Some(&state))?;

        self.with_database(move |db| {
            if !db.project_exists(&project_id)? {
                let placeholder = Project::placeholder(&project_id);
                validate_project(Some(&placeholder))?;
                db.insert_project(&placeholder)?;
                info!("Created placeholder project {project_id}");
            }

            let sprint = db.insert_sprint(&new_id(SPRINT_ID_PREFIX), &project_id, &state)?;
            info!("Created sprint {} in project {project_id}", sprint.id());
            Ok(sprint)
        })
        .await
    }

    /// Replaces a sprint's whole planning document.
    ///
    /// The document is validated first; on success the listing fields (title,
    /// dates, lifecycle status) and the update time are refreshed from it in
    /// the same write.
    ///
    /// # Errors
    ///
    /// Returns `SprintboardError::SprintNotFound` when no sprint has the ID,
    /// or `SprintboardError::Validation` with the first violation found.
    pub async fn replace_sprint_state(&self, params: &ReplaceSprintState) -> Result<Sprint> {
        let id = params.id.clone();
        let state = params.state.clone();

        self.with_database(move |db| {
            if !db.sprint_exists(&id)? {
                return Err(SprintboardError::SprintNotFound { id });
            }

            let Some(state) = state else {
                return Err(Violation::missing("Sprint state is required.").into());
            };
            if let Err(violation) = validate_state(Some(&state)) {
                warn!("Rejected state for sprint {id}: {violation}");
                return Err(violation.into());
            }

            let sprint = db
                .replace_sprint_state(&id, &state)?
                .ok_or_else(|| SprintboardError::SprintNotFound { id: id.clone() })?;
            info!("Replaced state of sprint {id}");
            Ok(sprint)
        })
        .await
    }

    /// Deletes a sprint, returning its last listing record.
    pub async fn delete_sprint(&self, params: &Id) -> Result<SprintSummary> {
        let id = params.id.clone();

        self.with_database(move |db| {
            let sprint = db
                .get_sprint(&id)?
                .ok_or_else(|| SprintboardError::SprintNotFound { id: id.clone() })?;
            if !db.delete_sprint(&id)? {
                return Err(SprintboardError::SprintNotFound { id });
            }
            info!("Deleted sprint {id}");
            Ok(sprint.meta)
        })
        .await
    }
}
