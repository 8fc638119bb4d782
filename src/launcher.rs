//! # Launcher
//!
//! Orchestrates the disable-and-relaunch workflow: load config, gate on
//! emptiness, probe the CLI, build the command, confirm when configured to,
//! close the current window or folder, and spawn the relaunch.
//!
//! One linear run per invocation. Every failure either stops the run before
//! anything destructive happens or, after the point of no return, is logged
//! and dropped: once the window is closing there is nobody left to ask.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::{path::Path, thread, time::Duration};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    cli::EditorCli,
    command::{build_disable_command, is_well_formed_id},
    config::Config,
    constants::{
        CLI_DOCS_URL, CLOSE_FOLDER_DELAY, MSG_CODE_NOT_RECOGNIZED, MSG_DISABLE_CONFIRM,
        MSG_NO_EXTENSIONS_TO_DISABLE, MSG_UTILITY_INACTIVE,
    },
    host::EditorHost,
    interact::InteractionGate,
};

/// Capability to trigger the relaunch workflow.
///
/// The management panel depends on this instead of on [`Launcher`] directly.
pub trait RelaunchTrigger {
    fn relaunch(&mut self, workspace: &Path) -> Result<()>;
}

/// The workflow orchestrator.
///
/// Also owns the utility's process-scoped active flag: enabled at process
/// start, toggled in memory, never persisted.
pub struct Launcher<'a> {
    gate: &'a dyn InteractionGate,
    host: &'a dyn EditorHost,
    cli: &'a dyn EditorCli,
    enabled: bool,
    grace_delay: Duration,
}

impl<'a> Launcher<'a> {
    pub fn new(
        gate: &'a dyn InteractionGate,
        host: &'a dyn EditorHost,
        cli: &'a dyn EditorCli,
    ) -> Self {
        Self {
            gate,
            host,
            cli,
            enabled: true,
            grace_delay: CLOSE_FOLDER_DELAY,
        }
    }

    /// Overrides the folder-close grace delay. Tests use a zero delay.
    #[must_use]
    pub const fn with_grace_delay(mut self, delay: Duration) -> Self {
        self.grace_delay = delay;
        self
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Runs the full disable-and-relaunch workflow for a workspace.
    ///
    /// This is the orchestrator boundary: expected failures are surfaced
    /// through the interaction gate and unexpected errors are converted to a
    /// generic message. Nothing propagates silently and nothing is retried.
    pub fn disable_and_relaunch(&mut self, workspace: &Path) -> Result<()> {
        if let Err(err) = self.run(workspace) {
            self.gate
                .report_error(&format!("An unexpected error occurred: {err:#}"), None);
        }
        Ok(())
    }

    fn run(&mut self, workspace: &Path) -> Result<()> {
        if !self.enabled {
            self.gate.notify(MSG_UTILITY_INACTIVE);
            return Ok(());
        }

        let config = match Config::load(workspace) {
            Ok(config) => config,
            Err(err) => {
                self.gate.report_error(&err.to_string(), None);
                return Ok(());
            }
        };

        if !config.has_extensions_to_disable() {
            self.gate.notify(MSG_NO_EXTENSIONS_TO_DISABLE);
            return Ok(());
        }

        if !self.cli.is_available(workspace) {
            let open_docs = self.gate.report_error(MSG_CODE_NOT_RECOGNIZED, Some("Learn more"));
            if open_docs {
                self.host.open_url(CLI_DOCS_URL)?;
            }
            return Ok(());
        }

        let command = build_disable_command(&config, workspace);
        self.warn_malformed_ids(&config);

        if !config.auto_reload && !self.gate.confirm(MSG_DISABLE_CONFIRM, None) {
            // Declined: stop cleanly before anything destructive
            return Ok(());
        }

        if config.open_in_new_window {
            self.host.close_window()?;
        } else {
            self.host.close_folder()?;
            // Folder close is asynchronous on the editor side; the fixed
            // delay is a soft ordering concession, not a completion signal.
            thread::sleep(self.grace_delay);
        }

        // Past the point of no return: the old window may already be
        // tearing down, so a spawn failure is logged, never re-surfaced.
        if let Err(err) = self.cli.launch(&command, workspace) {
            eprintln!("{} {err:#}", "warning:".yellow());
        }

        Ok(())
    }

    /// Warns about identifiers that do not look like `publisher.name`.
    /// They still pass through to the command unchanged.
    fn warn_malformed_ids(&self, config: &Config) {
        for id in config.disabled.iter().filter(|id| !is_well_formed_id(id)) {
            eprintln!(
                "{} '{id}' does not look like an extension identifier",
                "warning:".yellow()
            );
        }
    }
}

impl RelaunchTrigger for Launcher<'_> {
    fn relaunch(&mut self, workspace: &Path) -> Result<()> {
        self.disable_and_relaunch(workspace)
    }
}
