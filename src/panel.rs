//! # Management Panel Core
//!
//! Message-passing boundary between the dashboard presentation layer and the
//! configuration core. The TUI screen sends [`PanelMessage`]s; the controller
//! answers with [`PanelReply`]s. Keeping the protocol explicit makes the
//! panel logic testable without a terminal.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::EditorCli, config::Config, constants::SELF_EXTENSION_ID, launcher::RelaunchTrigger,
};

/// One installed extension as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    pub id: String,
    pub enabled: bool,
}

/// Messages the presentation layer sends to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    Ready,
    ToggleExtension { id: String, enabled: bool },
    SaveConfiguration { disabled_extensions: Vec<String> },
    ApplyChanges,
    ResetToDefaults,
}

/// Replies the core sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelReply {
    UpdateExtensions {
        extensions: Vec<ExtensionInfo>,
        config: Config,
        pending_changes: usize,
    },
    ConfigurationSaved {
        success: bool,
        error: Option<String>,
    },
}

/// Core side of the dashboard: owns the working set of disabled extensions
/// and persists it through [`Config::save`].
///
/// Holds the relaunch capability abstractly so the panel never depends on
/// the orchestrator type itself.
pub struct PanelController<'a> {
    workspace: PathBuf,
    cli: &'a dyn EditorCli,
    relaunch: &'a mut dyn RelaunchTrigger,
    baseline: Config,
    pending_disabled: Vec<String>,
}

impl<'a> PanelController<'a> {
    pub fn new(
        workspace: PathBuf,
        cli: &'a dyn EditorCli,
        relaunch: &'a mut dyn RelaunchTrigger,
    ) -> Self {
        Self {
            workspace,
            cli,
            relaunch,
            baseline: Config::default(),
            pending_disabled: Vec::new(),
        }
    }

    /// The current working set of disabled extension identifiers.
    pub fn pending_disabled(&self) -> &[String] {
        &self.pending_disabled
    }

    /// Number of toggles not yet persisted.
    pub fn pending_changes(&self) -> usize {
        let added = self
            .pending_disabled
            .iter()
            .filter(|id| !self.baseline.disabled.contains(id))
            .count();
        let removed = self
            .baseline
            .disabled
            .iter()
            .filter(|id| !self.pending_disabled.contains(id))
            .count();
        added + removed
    }

    /// Handles one message from the presentation layer.
    pub fn handle(&mut self, message: PanelMessage) -> Result<Vec<PanelReply>> {
        match message {
            PanelMessage::Ready => Ok(vec![self.snapshot()?]),

            PanelMessage::ToggleExtension { id, enabled } => {
                if enabled {
                    self.pending_disabled.retain(|existing| existing != &id);
                } else if !self.pending_disabled.contains(&id) {
                    self.pending_disabled.push(id);
                }
                Ok(Vec::new())
            }

            PanelMessage::SaveConfiguration {
                disabled_extensions,
            } => Ok(vec![self.save(disabled_extensions)]),

            PanelMessage::ApplyChanges => {
                self.relaunch.relaunch(&self.workspace)?;
                Ok(Vec::new())
            }

            PanelMessage::ResetToDefaults => {
                let saved = self.save(Vec::new());
                let mut replies = vec![saved];
                replies.push(self.snapshot()?);
                Ok(replies)
            }
        }
    }

    /// Builds the `UpdateExtensions` reply from a fresh config load and the
    /// installed-extension listing. A missing or broken config file falls
    /// back to defaults here; the dashboard is usable either way.
    fn snapshot(&mut self) -> Result<PanelReply> {
        self.baseline = Config::load(&self.workspace).unwrap_or_default();
        self.pending_disabled = self.baseline.disabled.clone();

        let extensions = self
            .cli
            .installed_extensions(&self.workspace)?
            .into_iter()
            .filter(|id| id != SELF_EXTENSION_ID)
            .map(|id| {
                let enabled = !self.baseline.disabled.contains(&id);
                ExtensionInfo { id, enabled }
            })
            .collect();

        Ok(PanelReply::UpdateExtensions {
            extensions,
            config: self.baseline.clone(),
            pending_changes: self.pending_changes(),
        })
    }

    /// Persists a disabled list, preserving the other settings. Save
    /// failures become a reply, not an error: the panel stays open.
    fn save(&mut self, disabled: Vec<String>) -> PanelReply {
        let config = Config {
            disabled,
            auto_reload: self.baseline.auto_reload,
            open_in_new_window: self.baseline.open_in_new_window,
        };

        match config.save(&self.workspace) {
            Ok(()) => {
                self.baseline = config;
                self.pending_disabled = self.baseline.disabled.clone();
                PanelReply::ConfigurationSaved {
                    success: true,
                    error: None,
                }
            }
            Err(err) => PanelReply::ConfigurationSaved {
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}
