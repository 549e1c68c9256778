//! Command definitions and handlers for the `sb` binary
//!
//! Commands follow the parameter wrapper pattern: clap-derived `*Args`
//! structures own the CLI concerns (flags, help text) and convert into the
//! framework-free parameter types of `sprintboard_core::params`.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Display → Renderer
//! ```
//!
//! Planning documents are exchanged as JSON files; a path of `-` reads the
//! document from standard input.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use sprintboard_core::{
    build_default_state,
    display::{
        CreateResult, DeleteResult, OperationStatus, Projects, SprintSummaries, UpdateResult,
    },
    params::*,
    validate_document_json, Planner, SprintboardError, Validation,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Project status accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ProjectStatusArg {
    /// Not started yet
    Draft,
    /// In progress
    Active,
    /// Finished or shelved
    Archived,
}

impl std::fmt::Display for ProjectStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatusArg::Draft => write!(f, "draft"),
            ProjectStatusArg::Active => write!(f, "active"),
            ProjectStatusArg::Archived => write!(f, "archived"),
        }
    }
}

/// Create a new project
#[derive(Args)]
pub struct CreateProjectArgs {
    /// Display name; defaults to "Untitled project"
    pub name: Option<String>,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[arg(long, help = "End date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
    #[arg(short, long, help = "Free-text description of the project")]
    pub description: Option<String>,
    #[arg(long, value_enum, help = "Initial status; defaults to active")]
    pub status: Option<ProjectStatusArg>,
}

impl From<CreateProjectArgs> for CreateProject {
    fn from(val: CreateProjectArgs) -> Self {
        CreateProject {
            name: val.name,
            start_date: val.start_date,
            end_date: val.end_date,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Update a project
///
/// Only the given fields change; everything else keeps its stored value.
#[derive(Args)]
pub struct UpdateProjectArgs {
    #[arg(help = "ID of the project to update")]
    pub id: String,
    #[arg(short, long, help = "New display name")]
    pub name: Option<String>,
    #[arg(long, help = "New start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[arg(long, help = "New end date (YYYY-MM-DD)")]
    pub end_date: Option<String>,
    #[arg(short, long, help = "New description; an empty string clears it")]
    pub description: Option<String>,
    #[arg(long, value_enum, help = "New status")]
    pub status: Option<ProjectStatusArg>,
}

impl From<UpdateProjectArgs> for UpdateProject {
    fn from(val: UpdateProjectArgs) -> Self {
        UpdateProject {
            id: val.id,
            name: val.name,
            start_date: val.start_date,
            end_date: val.end_date,
            description: val.description,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Identify a single project or sprint
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Unique identifier of the resource")]
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    #[command(alias = "c")]
    Create(CreateProjectArgs),
    /// List all projects, most recently updated first
    #[command(alias = "l")]
    List,
    /// Show details of a project
    #[command(alias = "s")]
    Show(IdArgs),
    /// Update a project's fields
    #[command(alias = "u")]
    Update(UpdateProjectArgs),
    /// Delete a project and all of its sprints
    Delete(IdArgs),
}

/// Create a sprint with the default planning document
#[derive(Args)]
pub struct CreateSprintArgs {
    #[arg(help = "ID of the owning project; created on the fly if unknown")]
    pub project_id: String,
    #[arg(short, long, help = "Sprint title; defaults to \"Untitled sprint\"")]
    pub title: Option<String>,
}

impl From<CreateSprintArgs> for CreateSprint {
    fn from(val: CreateSprintArgs) -> Self {
        CreateSprint {
            project_id: Some(val.project_id),
            title: val.title,
        }
    }
}

/// List the sprints of a project
#[derive(Args)]
pub struct ListSprintsArgs {
    #[arg(help = "ID of the project whose sprints to list")]
    pub project_id: String,
}

impl From<ListSprintsArgs> for ListSprints {
    fn from(val: ListSprintsArgs) -> Self {
        ListSprints {
            project_id: val.project_id,
        }
    }
}

/// Show a sprint
#[derive(Args)]
pub struct ShowSprintArgs {
    #[arg(help = "Unique identifier of the sprint")]
    pub id: String,
    #[arg(long, help = "Print the raw planning document as JSON")]
    pub json: bool,
}

/// Replace a sprint's planning document with the contents of a JSON file
#[derive(Args)]
pub struct ReplaceStateArgs {
    #[arg(help = "Unique identifier of the sprint")]
    pub id: String,
    #[arg(help = "Path of the JSON document, or - for standard input")]
    pub file: PathBuf,
}

impl ReplaceStateArgs {
    /// Reads and parses the document file.
    pub fn into_params(self) -> Result<ReplaceSprintState> {
        let json = read_document(&self.file)?;
        let state = serde_json::from_str(&json)
            .with_context(|| format!("Invalid planning document in {}", self.file.display()))?;
        Ok(ReplaceSprintState { id: self.id, state })
    }
}

#[derive(Subcommand)]
pub enum SprintCommands {
    /// Create a sprint under a project
    #[command(alias = "c")]
    Create(CreateSprintArgs),
    /// List the sprints of a project
    #[command(alias = "l")]
    List(ListSprintsArgs),
    /// Show a sprint and its planning document
    #[command(alias = "s")]
    Show(ShowSprintArgs),
    /// Replace a sprint's planning document
    #[command(alias = "r")]
    ReplaceState(ReplaceStateArgs),
    /// Delete a sprint
    Delete(IdArgs),
}

/// Validate a planning document offline
#[derive(Args)]
pub struct ValidateArgs {
    #[arg(help = "Path of the JSON document, or - for standard input")]
    pub file: PathBuf,
}

/// Print the default planning document
#[derive(Args)]
pub struct DefaultsArgs {
    #[arg(short, long, help = "Sprint title to put in the document")]
    pub title: Option<String>,
}

/// Reads a document from a file, or from stdin when the path is `-`.
fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read document from standard input")?;
        return Ok(json);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_project_command(&self, command: ProjectCommands) -> Result<()> {
        match command {
            ProjectCommands::Create(args) => {
                let project = self
                    .planner
                    .create_project(&args.into())
                    .await
                    .context("Failed to create project")?;
                self.renderer.render(&CreateResult::new(project).to_string())
            }
            ProjectCommands::List => self.list_projects().await,
            ProjectCommands::Show(args) => {
                let project = self
                    .planner
                    .get_project(&args.into())
                    .await
                    .context("Failed to show project")?;
                self.renderer.render(&project.to_string())
            }
            ProjectCommands::Update(args) => {
                let project = self
                    .planner
                    .update_project(&args.into())
                    .await
                    .context("Failed to update project")?;
                self.renderer.render(&UpdateResult::new(project).to_string())
            }
            ProjectCommands::Delete(args) => {
                let project = self
                    .planner
                    .delete_project(&args.into())
                    .await
                    .context("Failed to delete project")?;
                self.renderer.render(&DeleteResult::new(project).to_string())
            }
        }
    }

    pub async fn handle_sprint_command(&self, command: SprintCommands) -> Result<()> {
        match command {
            SprintCommands::Create(args) => {
                let sprint = self
                    .planner
                    .create_sprint(&args.into())
                    .await
                    .context("Failed to create sprint")?;
                self.renderer.render(&CreateResult::new(sprint).to_string())
            }
            SprintCommands::List(args) => {
                let sprints = self
                    .planner
                    .list_sprints(&args.into())
                    .await
                    .context("Failed to list sprints")?;
                self.renderer.render(&SprintSummaries(sprints).to_string())
            }
            SprintCommands::Show(args) => {
                let sprint = self
                    .planner
                    .get_sprint(&Id { id: args.id })
                    .await
                    .context("Failed to show sprint")?;
                if args.json {
                    self.renderer.render_json(&sprint.state)
                } else {
                    self.renderer.render(&sprint.to_string())
                }
            }
            SprintCommands::ReplaceState(args) => {
                let params = args.into_params()?;
                let sprint = self
                    .planner
                    .replace_sprint_state(&params)
                    .await
                    .context("Failed to replace sprint state")?;
                self.renderer.render(&UpdateResult::new(sprint).to_string())
            }
            SprintCommands::Delete(args) => {
                let sprint = self
                    .planner
                    .delete_sprint(&args.into())
                    .await
                    .context("Failed to delete sprint")?;
                self.renderer.render(&DeleteResult::new(sprint).to_string())
            }
        }
    }

    pub async fn list_projects(&self) -> Result<()> {
        let projects = self
            .planner
            .list_projects()
            .await
            .context("Failed to list projects")?;
        self.renderer.render(&Projects(projects).to_string())
    }
}

/// Validates a document file without touching the database.
///
/// A violation is reported as an error so the exit status is non-zero.
pub fn validate(renderer: &TerminalRenderer, args: ValidateArgs) -> Result<()> {
    let json = read_document(&args.file)?;
    let validation: Validation = match validate_document_json(&json) {
        Ok(_) => Ok(()),
        Err(SprintboardError::Validation(violation)) => Err(violation),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Invalid planning document in {}", args.file.display())
            })
        }
    };

    let status = OperationStatus::from(&validation);
    if !status.success {
        bail!("{}", status.message);
    }
    renderer.render(&status.to_string())
}

/// Prints the default planning document as JSON.
pub fn defaults(renderer: &TerminalRenderer, args: DefaultsArgs) -> Result<()> {
    renderer.render_json(&build_default_state(args.title.as_deref()))
}
