//! # Test Harness
//!
//! Temporary-workspace helpers and recording doubles for the launcher's
//! collaborator traits. All commands under test take explicit workspace
//! paths, so no current-directory juggling is needed.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Result;
use tempfile::TempDir;

use quickext::{command::LaunchCommand, EditorCli, EditorHost, InteractionGate, RelaunchTrigger};

// =============================================================================
// Workspace Environment
// =============================================================================

/// A temporary workspace directory.
pub struct TestEnv {
    workspace: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            workspace: TempDir::new().expect("Failed to create temp workspace"),
        }
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    /// Returns the canonical config file path.
    pub fn config_path(&self) -> PathBuf {
        self.path().join(".vscode").join("ext.config.json")
    }

    /// Writes the workspace config file at `.vscode/ext.config.json`.
    pub fn write_config(&self, content: &str) {
        self.write_config_in("", content);
    }

    /// Writes a config file under a subdirectory of the workspace
    /// (e.g. `"packages/app"` or `"node_modules/dep"`).
    pub fn write_config_in(&self, subdir: &str, content: &str) {
        let dir = if subdir.is_empty() {
            self.path().join(".vscode")
        } else {
            self.path().join(subdir).join(".vscode")
        };
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("ext.config.json"), content).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read config")
    }
}

// =============================================================================
// Recording Doubles
// =============================================================================

/// Everything observable the launcher did, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Notify(String),
    Error(String, Option<String>),
    Confirm(String),
    Probe,
    CloseWindow,
    CloseFolder,
    OpenUrl(String),
    Launch(String),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<Event> {
    log.borrow().clone()
}

/// Gate with scripted answers.
pub struct ScriptedGate {
    log: EventLog,
    pub confirm_answer: bool,
    pub action_answer: bool,
}

impl ScriptedGate {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
            confirm_answer: false,
            action_answer: false,
        }
    }

    #[must_use]
    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }
}

impl InteractionGate for ScriptedGate {
    fn confirm(&self, message: &str, _detail: Option<&str>) -> bool {
        self.log.borrow_mut().push(Event::Confirm(message.to_string()));
        self.confirm_answer
    }

    fn report_error(&self, message: &str, action: Option<&str>) -> bool {
        self.log.borrow_mut().push(Event::Error(
            message.to_string(),
            action.map(ToString::to_string),
        ));
        action.is_some() && self.action_answer
    }

    fn notify(&self, message: &str) {
        self.log.borrow_mut().push(Event::Notify(message.to_string()));
    }
}

/// Host that records window/folder/URL requests.
pub struct FakeHost {
    log: EventLog,
}

impl FakeHost {
    pub fn new(log: &EventLog) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl EditorHost for FakeHost {
    fn close_window(&self) -> Result<()> {
        self.log.borrow_mut().push(Event::CloseWindow);
        Ok(())
    }

    fn close_folder(&self) -> Result<()> {
        self.log.borrow_mut().push(Event::CloseFolder);
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        self.log.borrow_mut().push(Event::OpenUrl(url.to_string()));
        Ok(())
    }
}

/// Editor CLI double with a scripted availability answer and install list.
pub struct FakeCli {
    log: EventLog,
    pub available: bool,
    pub installed: Vec<String>,
}

impl FakeCli {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
            available: true,
            installed: Vec::new(),
        }
    }

    #[must_use]
    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    #[must_use]
    pub fn installed(mut self, ids: &[&str]) -> Self {
        self.installed = ids.iter().map(ToString::to_string).collect();
        self
    }
}

impl EditorCli for FakeCli {
    fn is_available(&self, _workspace: &Path) -> bool {
        self.log.borrow_mut().push(Event::Probe);
        self.available
    }

    fn launch(&self, command: &LaunchCommand, _workspace: &Path) -> Result<()> {
        self.log.borrow_mut().push(Event::Launch(command.rendered()));
        Ok(())
    }

    fn installed_extensions(&self, _workspace: &Path) -> Result<Vec<String>> {
        Ok(self.installed.clone())
    }
}

/// Relaunch trigger that counts invocations.
#[derive(Debug, Default)]
pub struct RecordingTrigger {
    pub calls: Vec<PathBuf>,
}

impl RelaunchTrigger for RecordingTrigger {
    fn relaunch(&mut self, workspace: &Path) -> Result<()> {
        self.calls.push(workspace.to_path_buf());
        Ok(())
    }
}
