//! # quickext
//!
//! A workspace-scoped extension toggler for VS Code.
//!
//! Reads `.vscode/ext.config.json`, computes the set of extensions to
//! suppress, and relaunches the editor through its `code` CLI with
//! `--disable-extension` flags. A terminal dashboard toggles which
//! extensions are marked disabled and persists the choice back to the file.
//!
//! ## Features
//!
//! - **Per-workspace config**: one JSON file, checked into the workspace
//! - **Safe relaunch**: commands are spawned as argv, never through a shell
//! - **Self-exclusion**: the utility always disables itself in the new
//!   instance so the workflow cannot recurse
//! - **Dashboard**: interactive TUI for toggling and saving
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod constants;
pub mod host;
pub mod interact;
pub mod launcher;
pub mod panel;
pub mod tui;
pub mod workspace;

pub use cli::{CodeCli, EditorCli};
pub use command::{build_disable_command, LaunchCommand};
pub use config::{Config, ConfigError};
pub use host::EditorHost;
pub use interact::InteractionGate;
pub use launcher::{Launcher, RelaunchTrigger};
