//! # Editor CLI Boundary
//!
//! Thin wrappers around the VS Code `code` command-line binary: availability
//! probing, fire-and-forget relaunching, and installed-extension listing.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

use crate::{
    command::{version_check_command, LaunchCommand},
    constants::{CODE_BIN, LIST_EXTENSIONS_FLAG},
};

/// Operations against the external editor binary.
///
/// Production code uses [`CodeCli`]; tests inject recording fakes so the
/// orchestration sequence can be verified without a `code` install.
pub trait EditorCli {
    /// Checks whether the editor binary is invocable from the given
    /// working directory. All failure modes (non-zero exit, binary not
    /// found) collapse to `false`.
    fn is_available(&self, workspace: &Path) -> bool;

    /// Spawns the relaunch command with the workspace as working directory.
    /// Fire-and-forget: the spawned process is not waited on.
    fn launch(&self, command: &LaunchCommand, workspace: &Path) -> Result<()>;

    /// Lists installed extension identifiers, one per line of CLI output.
    fn installed_extensions(&self, workspace: &Path) -> Result<Vec<String>>;
}

/// The real `code` CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeCli;

impl CodeCli {
    /// Opens a file in the editor, fire-and-forget.
    pub fn open_file(&self, path: &Path) -> Result<()> {
        Command::new(CODE_BIN)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .with_context(|| format!("Failed to open {} in the editor", path.display()))
    }
}

impl EditorCli for CodeCli {
    fn is_available(&self, workspace: &Path) -> bool {
        let probe = version_check_command();
        let mut parts = probe.split_whitespace();
        let Some(program) = parts.next() else {
            return false;
        };
        Command::new(program)
            .args(parts)
            .current_dir(workspace)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn launch(&self, command: &LaunchCommand, workspace: &Path) -> Result<()> {
        command
            .to_process()
            .current_dir(workspace)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .with_context(|| format!("Failed to spawn: {}", command.rendered()))
    }

    fn installed_extensions(&self, workspace: &Path) -> Result<Vec<String>> {
        let output = Command::new(CODE_BIN)
            .arg(LIST_EXTENSIONS_FLAG)
            .current_dir(workspace)
            .stderr(Stdio::null())
            .output()
            .context("Failed to run 'code --list-extensions'")?;

        if !output.status.success() {
            anyhow::bail!("'code --list-extensions' exited with {}", output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}
