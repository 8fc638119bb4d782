//! # Update / Repository / Settings / Report Commands
//!
//! Auxiliary commands that direct the user to external resources or to the
//! workspace configuration file. The update check performs no real version
//! comparison; it points at the marketplace page.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::CodeCli,
    config::Config,
    constants::{
        ISSUES_URL, MARKETPLACE_URL, MSG_NO_CONFIG_FILE, MSG_OPENING_REPO, MSG_OPENING_REPORT,
        MSG_UPDATE_CHECK, MSG_UPDATE_NOT_AVAILABLE, REPO_URL,
    },
    host::{EditorHost, TerminalHost},
    interact::{InteractionGate, TerminalGate},
    workspace,
};

/// Executes the update command.
pub fn check_update() -> Result<()> {
    let gate = TerminalGate;
    let host = TerminalHost;

    gate.notify(MSG_UPDATE_CHECK);

    let open_marketplace = gate.confirm(
        MSG_UPDATE_NOT_AVAILABLE,
        Some("Check the marketplace for the latest version?"),
    );
    if open_marketplace {
        host.open_url(MARKETPLACE_URL)?;
    }

    Ok(())
}

/// Executes the repo command.
pub fn open_repository() -> Result<()> {
    let gate = TerminalGate;
    gate.notify(MSG_OPENING_REPO);
    TerminalHost.open_url(REPO_URL)
}

/// Executes the report command.
pub fn report_issue() -> Result<()> {
    let gate = TerminalGate;
    gate.notify(MSG_OPENING_REPORT);
    TerminalHost.open_url(ISSUES_URL)
}

/// Executes the settings command: opens the workspace config file in the
/// editor. Reports when no config file exists; nothing is created here.
pub fn open_settings(path: Option<PathBuf>) -> Result<()> {
    let gate = TerminalGate;
    let workspace = workspace::resolve(path)?;

    match Config::locate(&workspace) {
        Ok(file) => CodeCli.open_file(&file),
        Err(_) => {
            gate.notify(MSG_NO_CONFIG_FILE);
            Ok(())
        }
    }
}
