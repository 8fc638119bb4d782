//! # Workspace Resolution
//!
//! Resolves the workspace directory a command operates on.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::constants::MSG_NO_WORKSPACE;

/// Resolves the target workspace path.
///
/// Uses the explicit path when given, otherwise the current directory.
/// The path must name an existing directory.
pub fn resolve(path: Option<PathBuf>) -> Result<PathBuf> {
    let workspace = match path {
        Some(path) => path,
        None => env::current_dir().context("Cannot get current directory")?,
    };

    if !workspace.is_dir() {
        anyhow::bail!("{MSG_NO_WORKSPACE}: {}", workspace.display());
    }

    // Canonicalize so the relaunch command carries a stable absolute path
    workspace
        .canonicalize()
        .with_context(|| format!("Cannot resolve workspace path: {}", workspace.display()))
}
