use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DefaultsArgs, ProjectCommands, SprintCommands, ValidateArgs};

/// Sprint capacity planning from the command line
///
/// Sprintboard keeps projects and their sprints in a local SQLite database.
/// Each sprint holds one planning document (window, calendar, events,
/// members, tasks, configuration) that is validated on every write. The same
/// operations are available to AI assistants through the MCP server mode.
#[derive(Parser)]
#[command(version, about, name = "sb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sprintboard/sprintboard.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sprintboard CLI
///
/// Without a command, `sb` lists all projects.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    #[command(alias = "p")]
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Manage sprints and their planning documents
    #[command(alias = "s")]
    Sprint {
        #[command(subcommand)]
        command: SprintCommands,
    },
    /// Check a planning document without storing it
    Validate(ValidateArgs),
    /// Print the planning document a new sprint starts with
    Defaults(DefaultsArgs),
    /// Start the MCP server
    Serve,
}
