//! # quickext CLI
//!
//! Command-line interface for the quickext workspace extension toggler.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use quickext::commands;

const GLOBAL_HELP: &str = "\
Configuration File:
  .vscode/ext.config.json    Workspace configuration

Fields (all optional):
  disabled           Array of extension IDs to disable (\"publisher.name\")
  autoReload         Relaunch without confirmation (default: true)
  openInNewWindow    Open the workspace in a new window (default: true)

Getting Started:
  qx manage                  Pick extensions to disable and save
  qx apply                   Relaunch VS Code with them disabled

Learn more:
  qx <COMMAND> --help        Show detailed help for a command";

#[derive(Parser)]
#[command(name = "qx")]
#[command(author = "ToolsHive")]
#[command(version)]
#[command(about = "Workspace-scoped extension toggler for VS Code")]
#[command(
    long_about = "quickext disables a configured set of VS Code extensions for one workspace by \
relaunching the editor through the `code` CLI with --disable-extension flags. The set lives in \
.vscode/ext.config.json, so it can be versioned alongside the project.

The tool always disables its own identifier in the relaunched instance to prevent the workflow \
from re-triggering recursively."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Disable the configured extensions and relaunch VS Code
    #[command(
        long_about = "Disable the configured extensions and relaunch VS Code.\n\n\
Loads .vscode/ext.config.json from the workspace, verifies that the `code` CLI is \
available, builds the relaunch command, and spawns it. With autoReload set to false \
a confirmation is asked first; with openInNewWindow set to false the current folder \
is closed and the window reused.",
        after_help = "Examples:\n  \
qx apply                       Relaunch the current directory's workspace\n  \
qx apply ~/src/myproject       Relaunch a specific workspace\n\n\
Note: the relaunch is one-way; once the spawn is triggered there is no undo."
    )]
    Apply {
        /// Workspace directory (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Open the extension management dashboard
    #[command(
        long_about = "Open the interactive dashboard for the workspace.\n\n\
Lists installed extensions with checkboxes (checked = enabled). Toggle with Space, \
save the configuration with 's', apply and relaunch with 'a', reset with 'r'.",
        after_help = "Examples:\n  \
qx manage                      Manage the current directory's workspace\n  \
qx manage ~/src/myproject      Manage a specific workspace"
    )]
    Manage {
        /// Workspace directory (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Enable the utility for this process
    #[command(
        long_about = "Enable the utility's active flag.\n\n\
The flag is process-scoped and in-memory only: every invocation starts enabled, \
and nothing is persisted."
    )]
    Enable,

    /// Disable the utility for this process
    #[command(
        long_about = "Disable the utility's active flag after confirmation.\n\n\
The flag is process-scoped and in-memory only; it resets on the next run."
    )]
    Disable,

    /// Check for updates
    #[command(
        long_about = "Check for updates.\n\n\
No real version comparison is performed; offers to open the marketplace page."
    )]
    Update,

    /// Open the project repository
    Repo,

    /// Open the workspace configuration file in the editor
    Settings {
        /// Workspace directory (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Open the issue tracker
    Report,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply { path } => commands::apply(path),
        Commands::Manage { path } => commands::manage(path),
        Commands::Enable => commands::enable_utility(),
        Commands::Disable => commands::disable_utility(),
        Commands::Update => commands::check_update(),
        Commands::Repo => commands::open_repository(),
        Commands::Settings { path } => commands::open_settings(path),
        Commands::Report => commands::report_issue(),
    }
}
