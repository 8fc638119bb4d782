//! # Manage Command
//!
//! Opens the extension management dashboard.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::{io::IsTerminal, path::PathBuf};

use anyhow::Result;

use crate::{
    cli::CodeCli,
    host::TerminalHost,
    interact::TerminalGate,
    launcher::Launcher,
    panel::{PanelController, PanelMessage},
    tui::{
        self,
        screens::{ManageOutcome, ManageScreen},
    },
    workspace,
};

/// Executes the manage command.
pub fn execute(path: Option<PathBuf>) -> Result<()> {
    let workspace = workspace::resolve(path)?;

    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The dashboard requires an interactive terminal");
    }

    let gate = TerminalGate;
    let host = TerminalHost;
    let cli = CodeCli;

    let mut launcher = Launcher::new(&gate, &host, &cli);
    let mut controller = PanelController::new(workspace, &cli, &mut launcher);

    let outcome = {
        let screen = ManageScreen::new(&mut controller)?;
        tui::run(screen)?
    };

    // Apply only after the terminal guard has restored the screen, so the
    // relaunch confirmation (if any) gets a sane terminal.
    if outcome == Some(ManageOutcome::Apply) {
        controller.handle(PanelMessage::ApplyChanges)?;
    }

    Ok(())
}
