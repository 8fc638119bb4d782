//! # Constants
//!
//! Centralized constants for magic values used throughout quickext.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::time::Duration;

// =============================================================================
// Identity
// =============================================================================

/// Marketplace identifier of this utility. Always passed as the first
/// `--disable-extension` flag so the relaunched editor cannot re-trigger
/// the workflow recursively.
pub const SELF_EXTENSION_ID: &str = "toolshive.quickext";

// =============================================================================
// Configuration File
// =============================================================================

/// Directory (relative to the workspace root) holding the config file.
pub const CONFIG_DIR: &str = ".vscode";

/// Name of the workspace configuration file.
pub const CONFIG_FILENAME: &str = "ext.config.json";

/// Directory name excluded from the configuration file search.
pub const EXCLUDED_DIR: &str = "node_modules";

// =============================================================================
// Editor CLI
// =============================================================================

/// The VS Code command-line binary.
pub const CODE_BIN: &str = "code";

/// Flag that opens the workspace in a new window.
pub const NEW_WINDOW_FLAG: &str = "--new-window";

/// Flag that reuses the current window.
pub const REUSE_WINDOW_FLAG: &str = "--reuse-window";

/// Flag that disables a single extension for the launched instance.
pub const DISABLE_EXTENSION_FLAG: &str = "--disable-extension";

/// Flag used to probe that the `code` binary is invocable.
pub const VERSION_FLAG: &str = "-v";

/// Flag that lists installed extension identifiers, one per line.
pub const LIST_EXTENSIONS_FLAG: &str = "--list-extensions";

/// Grace period between closing the current folder and spawning the
/// relaunch command. Folder close is asynchronous on the editor side, so
/// this is a soft ordering concession, not a completion signal.
pub const CLOSE_FOLDER_DELAY: Duration = Duration::from_millis(200);

// =============================================================================
// Messages
// =============================================================================

pub const MSG_NO_EXTENSIONS_TO_DISABLE: &str = "No extensions to disable";
pub const MSG_CODE_NOT_RECOGNIZED: &str = "'code' command is not recognized.";
pub const MSG_DISABLE_CONFIRM: &str = "Disable extensions and open new VS Code?";
pub const MSG_NO_CONFIG_FILE: &str = "No config file found";
pub const MSG_NO_WORKSPACE: &str = "No workspace folder found";
pub const MSG_UTILITY_ENABLED: &str = "quickext has been enabled";
pub const MSG_UTILITY_DISABLED: &str = "quickext has been disabled";
pub const MSG_UTILITY_ALREADY_ENABLED: &str = "quickext is already enabled";
pub const MSG_UTILITY_INACTIVE: &str = "quickext is disabled for this session";
pub const MSG_UPDATE_CHECK: &str = "Checking for updates...";
pub const MSG_UPDATE_NOT_AVAILABLE: &str = "You are using the latest version.";
pub const MSG_OPENING_REPO: &str = "Opening repository...";
pub const MSG_OPENING_REPORT: &str = "Opening issue tracker...";

// =============================================================================
// URLs
// =============================================================================

/// VS Code documentation on setting up the `code` shell command.
pub const CLI_DOCS_URL: &str =
    "https://code.visualstudio.com/docs/editor/command-line#_common-questions";

pub const REPO_URL: &str = "https://github.com/toolshive/quickext";

pub const ISSUES_URL: &str = "https://github.com/toolshive/quickext/issues";

pub const MARKETPLACE_URL: &str =
    "https://marketplace.visualstudio.com/items?itemName=toolshive.quickext";
