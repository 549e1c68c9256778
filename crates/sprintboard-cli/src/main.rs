//! Sprintboard CLI Application
//!
//! Command-line interface and MCP server for sprint capacity planning.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SprintboardMcpServer};
use renderer::TerminalRenderer;
use sprintboard_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    // Offline commands never open the database
    let command = match command {
        Some(Validate(args)) => return cli::validate(&renderer, args),
        Some(Defaults(args)) => return cli::defaults(&renderer, args),
        other => other,
    };

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Sprintboard started");

    match command {
        Some(Project { command }) => {
            Cli::new(planner, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Sprint { command }) => {
            Cli::new(planner, renderer)
                .handle_sprint_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Sprintboard MCP server");
            run_stdio_server(SprintboardMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Validate(_)) | Some(Defaults(_)) | None => {
            Cli::new(planner, renderer).list_projects().await
        }
    }
}
