//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use sprintboard_core::{
    display::{
        CreateResult, DeleteResult, OperationStatus, Projects, SprintSummaries, UpdateResult,
    },
    params as core, validate_state, Planner,
};

use super::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types stay free of MCP concerns; this transparent wrapper
// forwards deserialization and schema generation to the wrapped type.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateProject = McpParams<core::CreateProject>;
pub type UpdateProject = McpParams<core::UpdateProject>;
pub type ListSprints = McpParams<core::ListSprints>;
pub type CreateSprint = McpParams<core::CreateSprint>;
pub type ReplaceSprintState = McpParams<core::ReplaceSprintState>;
pub type ValidateState = McpParams<core::ValidateState>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn list_projects(&self) -> McpResult {
        debug!("list_projects");

        let projects = self
            .planner
            .list_projects()
            .await
            .map_err(|e| to_mcp_error("Failed to list projects", &e))?;

        text(Projects(projects))
    }

    pub async fn show_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_project: {:?}", params);

        let project = self
            .planner
            .get_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show project", &e))?;

        text(project)
    }

    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProject>,
    ) -> McpResult {
        debug!("create_project: {:?}", params);

        let project = self
            .planner
            .create_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create project", &e))?;

        text(CreateResult::new(project))
    }

    pub async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProject>,
    ) -> McpResult {
        debug!("update_project: {:?}", params);

        let project = self
            .planner
            .update_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update project", &e))?;

        text(UpdateResult::new(project))
    }

    pub async fn delete_project(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_project: {:?}", params);

        let project = self
            .planner
            .delete_project(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete project", &e))?;

        text(DeleteResult::new(project))
    }

    pub async fn list_sprints(&self, Parameters(params): Parameters<ListSprints>) -> McpResult {
        debug!("list_sprints: {:?}", params);

        let sprints = self
            .planner
            .list_sprints(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list sprints", &e))?;

        text(SprintSummaries(sprints))
    }

    /// Returns the readable summary followed by the document as JSON, so a
    /// client can edit it and send it back through `replace_sprint_state`.
    pub async fn show_sprint(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_sprint: {:?}", params);

        let sprint = self
            .planner
            .get_sprint(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show sprint", &e))?;

        let state = serde_json::to_string_pretty(&sprint.state)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode sprint: {e}"), None))?;

        Ok(CallToolResult::success(vec![
            Content::text(sprint.to_string()),
            Content::text(state),
        ]))
    }

    pub async fn create_sprint(&self, Parameters(params): Parameters<CreateSprint>) -> McpResult {
        debug!("create_sprint: {:?}", params);

        let sprint = self
            .planner
            .create_sprint(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create sprint", &e))?;

        text(CreateResult::new(sprint))
    }

    pub async fn replace_sprint_state(
        &self,
        Parameters(params): Parameters<ReplaceSprintState>,
    ) -> McpResult {
        debug!("replace_sprint_state: {}", params.as_ref().id);

        let sprint = self
            .planner
            .replace_sprint_state(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to replace sprint state", &e))?;

        text(UpdateResult::new(sprint))
    }

    pub async fn delete_sprint(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_sprint: {:?}", params);

        let sprint = self
            .planner
            .delete_sprint(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete sprint", &e))?;

        text(DeleteResult::new(sprint))
    }

    /// A violation is the answer here, not a protocol failure: it comes back
    /// as a tool result flagged as an error.
    pub async fn validate_state(&self, Parameters(params): Parameters<ValidateState>) -> McpResult {
        let validation = validate_state(params.as_ref().state.as_ref());
        let status = OperationStatus::from(&validation);
        debug!("validate_state: {}", status.message);

        let content = vec![Content::text(status.to_string())];
        if status.success {
            Ok(CallToolResult::success(content))
        } else {
            Ok(CallToolResult::error(content))
        }
    }
}
