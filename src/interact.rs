//! # User Interaction
//!
//! Mediates confirmations, error reporting, and notifications. The launcher
//! talks to a trait so tests can script decisions; the terminal
//! implementation uses the TUI confirm popup when a terminal is attached.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::tui::screens::confirm;

/// Boundary for user-facing decisions and messages.
pub trait InteractionGate {
    /// Presents a yes/cancel choice. Returns `true` only on an explicit
    /// affirmative; every dismissal (Esc, Ctrl-C, no terminal) is `false`.
    fn confirm(&self, message: &str, detail: Option<&str>) -> bool;

    /// Displays an error. With an action label, offers a single follow-up
    /// and returns whether it was chosen; without one, returns `false`.
    fn report_error(&self, message: &str, action: Option<&str>) -> bool;

    /// Fire-and-forget informational display.
    fn notify(&self, message: &str);
}

/// Terminal-backed gate used by all production commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGate;

impl InteractionGate for TerminalGate {
    fn confirm(&self, message: &str, detail: Option<&str>) -> bool {
        if !std::io::stdout().is_terminal() {
            return false;
        }
        // Cancelled and declined both map to false
        matches!(confirm(message, detail), Ok(Some(true)))
    }

    fn report_error(&self, message: &str, action: Option<&str>) -> bool {
        eprintln!("{} {message}", "error:".red().bold());
        match action {
            Some(label) => self.confirm(&format!("{label}?"), Some(message)),
            None => false,
        }
    }

    fn notify(&self, message: &str) {
        println!("{message}");
    }
}
