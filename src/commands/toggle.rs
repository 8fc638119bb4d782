//! # Enable / Disable Commands
//!
//! Toggles the utility's own active flag. The flag is process-scoped state
//! owned by the launcher: it starts enabled, lives in memory only, and
//! resets on every process start. There is deliberately no persistence.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    cli::CodeCli,
    constants::{MSG_UTILITY_ALREADY_ENABLED, MSG_UTILITY_DISABLED, MSG_UTILITY_ENABLED},
    host::TerminalHost,
    interact::{InteractionGate, TerminalGate},
    launcher::Launcher,
};

/// Executes the enable command.
pub fn enable() -> Result<()> {
    let gate = TerminalGate;
    let host = TerminalHost;
    let cli = CodeCli;
    let mut launcher = Launcher::new(&gate, &host, &cli);

    if launcher.is_enabled() {
        gate.notify(MSG_UTILITY_ALREADY_ENABLED);
    } else {
        launcher.set_enabled(true);
        gate.notify(MSG_UTILITY_ENABLED);
    }

    Ok(())
}

/// Executes the disable command.
pub fn disable() -> Result<()> {
    let gate = TerminalGate;
    let host = TerminalHost;
    let cli = CodeCli;
    let mut launcher = Launcher::new(&gate, &host, &cli);

    let confirmed = gate.confirm(
        "Are you sure you want to disable quickext?",
        Some("The flag is in-memory and resets on the next run."),
    );

    if confirmed {
        launcher.set_enabled(false);
        gate.notify(MSG_UTILITY_DISABLED);
    }

    Ok(())
}
