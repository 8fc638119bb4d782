//! # Launch Command Construction
//!
//! Pure construction of the VS Code relaunch command line from a normalized
//! configuration and a target workspace path.
//!
//! The command is held as a program plus ordered argv and is spawned without
//! a shell, so configured identifiers can never be interpreted as shell
//! syntax. The rendered string form exists for display and logging only.
//!
//! Copyright (c) 2026 ToolsHive. All rights reserved.
//! Licensed under the MIT License.

use std::{borrow::Cow, path::Path, process::Command};

use crate::{
    config::Config,
    constants::{
        CODE_BIN, DISABLE_EXTENSION_FLAG, NEW_WINDOW_FLAG, REUSE_WINDOW_FLAG, SELF_EXTENSION_ID,
        VERSION_FLAG,
    },
};

/// A fully constructed relaunch command: program and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    program: &'static str,
    args: Vec<String>,
}

impl LaunchCommand {
    /// The program to invoke.
    pub const fn program(&self) -> &'static str {
        self.program
    }

    /// The ordered argument list.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Converts into a spawnable `std::process::Command`.
    pub fn to_process(&self) -> Command {
        let mut cmd = Command::new(self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Renders the command as a single display string.
    ///
    /// Identifiers are shell-quoted only when they need it; the trailing
    /// workspace path is always quoted.
    pub fn rendered(&self) -> String {
        let mut out = String::from(self.program);
        let last = self.args.len().saturating_sub(1);
        for (i, arg) in self.args.iter().enumerate() {
            out.push(' ');
            if i == last {
                out.push('"');
                out.push_str(arg);
                out.push('"');
            } else {
                let quoted =
                    shlex::try_quote(arg).unwrap_or(Cow::Borrowed("''"));
                out.push_str(&quoted);
            }
        }
        out
    }
}

/// Builds the complete relaunch command for a configuration and target path.
///
/// Deterministic and pure: the same inputs always produce the same command.
/// The self-exclusion flag is emitted first, followed by one disable flag per
/// configured entry in file order (no dedup, no reordering), then the target
/// path as the final argument.
pub fn build_disable_command(config: &Config, target: &Path) -> LaunchCommand {
    let window_flag = if config.open_in_new_window {
        NEW_WINDOW_FLAG
    } else {
        REUSE_WINDOW_FLAG
    };

    let mut args = Vec::with_capacity(2 * config.disabled.len() + 4);
    args.push(window_flag.to_string());

    // Disable self to prevent recursion
    args.push(DISABLE_EXTENSION_FLAG.to_string());
    args.push(SELF_EXTENSION_ID.to_string());

    for id in &config.disabled {
        args.push(DISABLE_EXTENSION_FLAG.to_string());
        args.push(id.clone());
    }

    args.push(target.display().to_string());

    LaunchCommand {
        program: CODE_BIN,
        args,
    }
}

/// The fixed probe command string used to check CLI availability.
pub fn version_check_command() -> String {
    format!("{CODE_BIN} {VERSION_FLAG}")
}

/// Whether an identifier looks like a well-formed `publisher.name` id.
///
/// Used only to warn about suspicious entries; malformed identifiers still
/// pass through to the command unchanged.
pub fn is_well_formed_id(id: &str) -> bool {
    let mut parts = id.split('.');
    let (Some(publisher), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let valid_part = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    };
    valid_part(publisher) && valid_part(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(disabled: &[&str], auto_reload: bool, new_window: bool) -> Config {
        Config {
            disabled: disabled.iter().map(ToString::to_string).collect(),
            auto_reload,
            open_in_new_window: new_window,
        }
    }

    #[test]
    fn test_new_window_verb_selected() {
        let cmd = build_disable_command(&config(&[], true, true), Path::new("/ws"));
        assert_eq!(cmd.args()[0], NEW_WINDOW_FLAG);
    }

    #[test]
    fn test_reuse_window_verb_selected() {
        let cmd = build_disable_command(&config(&[], true, false), Path::new("/ws"));
        assert_eq!(cmd.args()[0], REUSE_WINDOW_FLAG);
    }

    #[test]
    fn test_self_exclusion_always_first() {
        let cmd = build_disable_command(&config(&["x.y"], true, true), Path::new("/ws"));
        assert_eq!(cmd.args()[1], DISABLE_EXTENSION_FLAG);
        assert_eq!(cmd.args()[2], SELF_EXTENSION_ID);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let cmd = build_disable_command(
            &config(&["b.ext", "a.ext", "b.ext"], true, true),
            Path::new("/ws"),
        );
        let ids: Vec<&str> = cmd
            .args()
            .windows(2)
            .filter(|pair| pair[0] == DISABLE_EXTENSION_FLAG)
            .map(|pair| pair[1].as_str())
            .collect();
        assert_eq!(ids, vec![SELF_EXTENSION_ID, "b.ext", "a.ext", "b.ext"]);
    }

    #[test]
    fn test_construction_is_deterministic() {
        let cfg = config(&["b.ext", "a.ext"], true, false);
        let a = build_disable_command(&cfg, Path::new("/ws"));
        let b = build_disable_command(&cfg, Path::new("/ws"));
        assert_eq!(a, b);
        assert_eq!(a.rendered(), b.rendered());
    }

    #[test]
    fn test_rendered_matches_grammar() {
        let cmd = build_disable_command(&config(&["foo.bar"], true, false), Path::new("/ws"));
        assert_eq!(
            cmd.rendered(),
            format!(
                "code --reuse-window --disable-extension {SELF_EXTENSION_ID} \
                 --disable-extension foo.bar \"/ws\""
            )
        );
    }

    #[test]
    fn test_target_path_is_final_argument() {
        let target = PathBuf::from("/some/deep/workspace");
        let cmd = build_disable_command(&config(&["a.b"], true, true), &target);
        assert_eq!(cmd.args().last().unwrap(), "/some/deep/workspace");
    }

    #[test]
    fn test_garbage_identifier_passes_through() {
        let cmd = build_disable_command(
            &config(&["not an id; rm -rf /"], true, true),
            Path::new("/ws"),
        );
        assert!(cmd.args().iter().any(|a| a == "not an id; rm -rf /"));
    }

    #[test]
    fn test_version_check_command() {
        assert_eq!(version_check_command(), "code -v");
    }

    #[test]
    fn test_well_formed_ids() {
        assert!(is_well_formed_id("publisher.extension-id"));
        assert!(is_well_formed_id("a.b_c"));
        assert!(!is_well_formed_id("noseparator"));
        assert!(!is_well_formed_id("too.many.dots"));
        assert!(!is_well_formed_id("has space.ext"));
        assert!(!is_well_formed_id(".ext"));
    }
}
