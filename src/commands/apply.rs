//! # Apply Command
//!
//! Runs the disable-and-relaunch workflow for a workspace.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::CodeCli, host::TerminalHost, interact::TerminalGate, launcher::Launcher, workspace,
};

/// Executes the apply command.
pub fn execute(path: Option<PathBuf>) -> Result<()> {
    let workspace = workspace::resolve(path)?;

    let gate = TerminalGate;
    let host = TerminalHost;
    let cli = CodeCli;

    let mut launcher = Launcher::new(&gate, &host, &cli);
    launcher.disable_and_relaunch(&workspace)
}
