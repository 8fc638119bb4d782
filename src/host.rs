//! # Editor Host Boundary
//!
//! The window/workbench side of the editor is the platform, not something
//! this tool reimplements. The trait exists so the launcher's sequencing
//! (close, wait, spawn) can be exercised in tests; the terminal
//! implementation is best-effort because a CLI invocation owns no editor
//! window of its own.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

/// Host-editor operations the launcher depends on.
pub trait EditorHost {
    /// Requests that the current window close before the relaunch.
    fn close_window(&self) -> Result<()>;

    /// Requests that the current folder close. Asynchronous on the editor
    /// side; completion is not observable from here.
    fn close_folder(&self) -> Result<()>;

    /// Opens a URL in the user's default handler.
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Host implementation for terminal invocations.
///
/// Window and folder close are notices only: the relaunched editor instance
/// takes over the workspace, and any previous window is the user's to close.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl EditorHost for TerminalHost {
    fn close_window(&self) -> Result<()> {
        println!("{}", "Close the current VS Code window if one is open.".dimmed());
        Ok(())
    }

    fn close_folder(&self) -> Result<()> {
        println!("{}", "Close the current folder if one is open.".dimmed());
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open URL: {url}"))
    }
}
