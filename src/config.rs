//! # Workspace Configuration
//!
//! Handles the workspace-level configuration stored at `.vscode/ext.config.json`.
//!
//! The on-disk format is deliberately loose: every field is optional and
//! malformed values degrade to defaults instead of failing the load. Only a
//! missing/ambiguous file or broken JSON is an error.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use walkdir::WalkDir;

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, EXCLUDED_DIR, MSG_NO_CONFIG_FILE};

/// Errors surfaced while loading the workspace configuration.
///
/// Each variant renders as the human-readable message shown to the user;
/// the orchestrator never retries any of them.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Zero or more than one config file was found under the workspace.
    /// Multiple matches are deliberately not disambiguated.
    #[error("{MSG_NO_CONFIG_FILE}")]
    NotFound,

    /// The file exists but is not valid JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw configuration as read from disk, before normalization.
///
/// Fields are kept as plain JSON values so that malformed shapes (a string
/// where an array is expected, a number where a bool is expected) survive
/// deserialization and can be coerced instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub disabled: Value,

    #[serde(default, rename = "autoReload")]
    pub auto_reload: Value,

    #[serde(default, rename = "openInNewWindow")]
    pub open_in_new_window: Value,
}

/// Validated configuration with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Extension identifiers to disable, in file order. Duplicates pass
    /// through unchanged.
    pub disabled: Vec<String>,

    /// Whether to relaunch without asking for confirmation (default true).
    #[serde(rename = "autoReload")]
    pub auto_reload: bool,

    /// Whether to open the workspace in a new window (default true).
    #[serde(rename = "openInNewWindow")]
    pub open_in_new_window: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            auto_reload: true,
            open_in_new_window: true,
        }
    }
}

impl Config {
    /// Locates the single config file under the workspace root.
    ///
    /// Walks the tree looking for `.vscode/ext.config.json`, skipping
    /// `node_modules`. Anything other than exactly one match is treated as
    /// "no config file found".
    pub fn locate(workspace: &Path) -> Result<PathBuf, ConfigError> {
        let mut matches: Vec<PathBuf> = Vec::new();

        let walker = WalkDir::new(workspace).into_iter().filter_entry(|entry| {
            entry.file_type().is_file() || entry.file_name() != EXCLUDED_DIR
        });

        for entry in walker.filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let in_config_dir = path
                .parent()
                .and_then(Path::file_name)
                .is_some_and(|dir| dir == CONFIG_DIR);
            if in_config_dir && entry.file_name() == CONFIG_FILENAME {
                matches.push(path.to_path_buf());
                if matches.len() > 1 {
                    return Err(ConfigError::NotFound);
                }
            }
        }

        match matches.pop() {
            Some(path) if matches.is_empty() => Ok(path),
            _ => Err(ConfigError::NotFound),
        }
    }

    /// Loads and normalizes the workspace configuration.
    ///
    /// Re-reads the file on every call; nothing is cached.
    pub fn load(workspace: &Path) -> Result<Self, ConfigError> {
        let path = Self::locate(workspace)?;
        let content = fs::read_to_string(&path)?;
        let raw: RawConfig = serde_json::from_str(&content)?;
        Ok(Self::from_raw(raw))
    }

    /// Applies defaults and coercions to a raw configuration.
    ///
    /// `disabled` becomes an empty vec for any non-array value; the two
    /// booleans default to `true` unless explicitly present as a JSON bool,
    /// so an explicit `false` is preserved.
    pub fn from_raw(raw: RawConfig) -> Self {
        let disabled = match raw.disabled {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(id) => Some(id),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            disabled,
            auto_reload: raw.auto_reload.as_bool().unwrap_or(true),
            open_in_new_window: raw.open_in_new_window.as_bool().unwrap_or(true),
        }
    }

    /// Whether the configuration names any extensions to disable.
    pub fn has_extensions_to_disable(&self) -> bool {
        !self.disabled.is_empty()
    }

    /// Returns the canonical config file path for a workspace root.
    pub fn path(workspace: &Path) -> PathBuf {
        workspace.join(CONFIG_DIR).join(CONFIG_FILENAME)
    }

    /// Writes the configuration to `.vscode/ext.config.json`, creating the
    /// directory if needed. Last writer wins; there is no locking.
    pub fn save(&self, workspace: &Path) -> Result<(), ConfigError> {
        let dir = workspace.join(CONFIG_DIR);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(workspace), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_applied_when_fields_missing() {
        let config = Config::from_raw(raw(json!({})));
        assert!(config.disabled.is_empty());
        assert!(config.auto_reload);
        assert!(config.open_in_new_window);
    }

    #[test]
    fn test_explicit_false_preserved() {
        let config = Config::from_raw(raw(json!({
            "autoReload": false,
            "openInNewWindow": false
        })));
        assert!(!config.auto_reload);
        assert!(!config.open_in_new_window);
    }

    #[test]
    fn test_null_booleans_default_to_true() {
        let config = Config::from_raw(raw(json!({
            "autoReload": null,
            "openInNewWindow": null
        })));
        assert!(config.auto_reload);
        assert!(config.open_in_new_window);
    }

    #[test]
    fn test_non_bool_values_default_to_true() {
        let config = Config::from_raw(raw(json!({
            "autoReload": "no",
            "openInNewWindow": 0
        })));
        assert!(config.auto_reload);
        assert!(config.open_in_new_window);
    }

    #[test]
    fn test_non_array_disabled_coerced_to_empty() {
        for value in [json!(null), json!("a.b"), json!(42), json!({"x": 1})] {
            let config = Config::from_raw(raw(json!({ "disabled": value })));
            assert!(config.disabled.is_empty(), "expected empty for {value}");
        }
    }

    #[test]
    fn test_disabled_order_and_duplicates_preserved() {
        let config = Config::from_raw(raw(json!({
            "disabled": ["b.ext", "a.ext", "b.ext"]
        })));
        assert_eq!(config.disabled, vec!["b.ext", "a.ext", "b.ext"]);
    }

    #[test]
    fn test_non_string_entries_dropped() {
        let config = Config::from_raw(raw(json!({
            "disabled": ["a.ext", 7, null, "b.ext"]
        })));
        assert_eq!(config.disabled, vec!["a.ext", "b.ext"]);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            disabled: vec!["foo.bar".to_string()],
            auto_reload: false,
            open_in_new_window: true,
        };
        config.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
