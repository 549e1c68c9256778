//! MCP server implementation for Sprintboard
//!
//! Exposes project and sprint management plus offline document validation as
//! Model Context Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use sprintboard_core::Planner;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{
    CreateProject, CreateSprint, Id, ListSprints, McpResult, ReplaceSprintState, UpdateProject,
    ValidateState,
};

const INSTRUCTIONS: &str = r#"Sprintboard stores sprint capacity plans. Each project owns sprints; each sprint holds one JSON planning document.

## Planning Document
- `sprint`: title, startDate, endDate (YYYY-MM-DD, both or neither)
- `calendar`: manual non-working days, removed non-working days, day schedules
- `events.items`: team events (date, minutes > 0, recurringDaily)
- `members.items`: name, roleType, seniority, maturity, availabilityPercent (0-100), optional availability events
- `tasks.items`: unique id, name, storyPoints, dependencies (never the task itself)
- `config.value`: global scheduling configuration
- `planningLifecycle`: editing, followup or closed

## Workflow
1. `create_project`, or pass any new project ID to `create_sprint` and a placeholder project is created
2. `create_sprint` returns a sprint with the default document
3. `show_sprint` returns the document as JSON; edit it and send the whole document to `replace_sprint_state`
4. `validate_state` checks a document without storing it

Writes are rejected with the first problem found, for example "Task ID already exists." Nothing is stored when a write is rejected.

## Tool Categories
- **Projects**: list_projects, show_project, create_project, update_project, delete_project
- **Sprints**: list_sprints, show_sprint, create_sprint, replace_sprint_state, delete_sprint
- **Documents**: validate_state"#;

/// MCP server for Sprintboard
#[derive(Clone)]
pub struct SprintboardMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SprintboardMcpServer {
    /// Create a new Sprintboard MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "list_projects",
        description = "List all projects, most recently updated first, with their IDs, statuses and dates."
    )]
    async fn list_projects(&self) -> McpResult {
        self.handlers().list_projects().await
    }

    #[tool(
        name = "show_project",
        description = "Show one project by ID: name, status (draft/active/archived), dates and description."
    )]
    async fn show_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_project(params).await
    }

    #[tool(
        name = "create_project",
        description = "Create a project. All fields are optional: a blank name becomes 'Untitled project' and a missing status becomes 'active'. Status must be draft, active or archived."
    )]
    async fn create_project(&self, params: Parameters<CreateProject>) -> McpResult {
        self.handlers().create_project(params).await
    }

    #[tool(
        name = "update_project",
        description = "Update a project by ID. Omitted fields keep their stored value; a blank name or status also keeps the stored one."
    )]
    async fn update_project(&self, params: Parameters<UpdateProject>) -> McpResult {
        self.handlers().update_project(params).await
    }

    #[tool(
        name = "delete_project",
        description = "Permanently delete a project and all of its sprints. This cannot be undone."
    )]
    async fn delete_project(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_project(params).await
    }

    #[tool(
        name = "list_sprints",
        description = "List the sprints of a project, most recently updated first, with title, dates and lifecycle status."
    )]
    async fn list_sprints(&self, params: Parameters<ListSprints>) -> McpResult {
        self.handlers().list_sprints(params).await
    }

    #[tool(
        name = "show_sprint",
        description = "Show a sprint by ID. Returns a readable summary and the complete planning document as JSON."
    )]
    async fn show_sprint(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_sprint(params).await
    }

    #[tool(
        name = "create_sprint",
        description = "Create a sprint with the default planning document under project_id (required). An unknown project ID creates a placeholder project. A blank title becomes 'Untitled sprint'."
    )]
    async fn create_sprint(&self, params: Parameters<CreateSprint>) -> McpResult {
        self.handlers().create_sprint(params).await
    }

    #[tool(
        name = "replace_sprint_state",
        description = "Replace a sprint's whole planning document. The document is validated first and rejected with the first problem found; on success the sprint's title, dates and lifecycle status are refreshed from it."
    )]
    async fn replace_sprint_state(&self, params: Parameters<ReplaceSprintState>) -> McpResult {
        self.handlers().replace_sprint_state(params).await
    }

    #[tool(
        name = "delete_sprint",
        description = "Permanently delete a sprint by ID."
    )]
    async fn delete_sprint(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_sprint(params).await
    }

    #[tool(
        name = "validate_state",
        description = "Check a planning document without storing it. Reports the first problem found, or that the document is valid."
    )]
    async fn validate_state(&self, params: Parameters<ValidateState>) -> McpResult {
        self.handlers().validate_state(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SprintboardMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sprintboard".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SprintboardMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Sprintboard MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
