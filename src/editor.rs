//! External editor integration.
//!
//! The editor is resolved in this order, first non-empty wins:
//!
//! 1. `--editor PROGRAM`
//! 2. `$EDITOR`
//! 3. `defaults.editor` from `entry.toml` (stock: `vim`)
//!
//! The program is run in the foreground with the entry path as its only
//! argument, and the scaffolder blocks until it exits. Running the process
//! goes through [`EditorLauncher`] so the rest of the crate never spawns
//! anything directly.

use std::env;
use std::io;
use std::path::Path;
use std::process::Command;

/// Environment variable consulted when no override is given.
pub const EDITOR_ENV: &str = "EDITOR";

/// How the editor process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    Success,
    /// Non-zero exit. `None` when terminated by a signal.
    Failed(Option<i32>),
}

/// Runs an editor on a file and waits for it.
pub trait EditorLauncher {
    /// Spawn `editor` with `path` as its sole argument and block until exit.
    ///
    /// Errors only when the process cannot be started.
    fn launch(&self, editor: &str, path: &Path) -> io::Result<EditorExit>;
}

/// Production launcher backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEditor;

impl EditorLauncher for SystemEditor {
    fn launch(&self, editor: &str, path: &Path) -> io::Result<EditorExit> {
        let status = Command::new(editor).arg(path).status()?;
        Ok(if status.success() {
            EditorExit::Success
        } else {
            EditorExit::Failed(status.code())
        })
    }
}

/// Pick the editor program from override, environment value, and fallback.
pub fn resolve_editor(
    override_editor: Option<&str>,
    env_editor: Option<&str>,
    fallback: &str,
) -> String {
    [override_editor, env_editor]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|e| !e.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Read `$EDITOR`, treating unset and non-unicode values alike.
pub fn editor_from_env() -> Option<String> {
    env::var(EDITOR_ENV).ok()
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Launcher that records invocations instead of spawning processes.
    #[derive(Default)]
    pub struct MockLauncher {
        pub launches: Mutex<Vec<(String, PathBuf)>>,
        pub exit: Option<EditorExit>,
        pub fail_to_start: bool,
    }

    impl MockLauncher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn exiting_with(exit: EditorExit) -> Self {
            Self {
                exit: Some(exit),
                ..Self::default()
            }
        }

        pub fn unstartable() -> Self {
            Self {
                fail_to_start: true,
                ..Self::default()
            }
        }

        pub fn get_launches(&self) -> Vec<(String, PathBuf)> {
            self.launches.lock().unwrap().clone()
        }
    }

    impl EditorLauncher for MockLauncher {
        fn launch(&self, editor: &str, path: &Path) -> io::Result<EditorExit> {
            self.launches
                .lock()
                .unwrap()
                .push((editor.to_string(), path.to_path_buf()));
            if self.fail_to_start {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such program"));
            }
            Ok(self.exit.unwrap_or(EditorExit::Success))
        }
    }

    #[test]
    fn override_wins() {
        assert_eq!(resolve_editor(Some("nano"), Some("emacs"), "vim"), "nano");
    }

    #[test]
    fn env_used_without_override() {
        assert_eq!(resolve_editor(None, Some("emacs"), "vim"), "emacs");
    }

    #[test]
    fn fallback_when_nothing_set() {
        assert_eq!(resolve_editor(None, None, "vim"), "vim");
    }

    #[test]
    fn blank_values_skipped() {
        assert_eq!(resolve_editor(Some(""), Some("  "), "vim"), "vim");
        assert_eq!(resolve_editor(Some(" "), Some("emacs"), "vim"), "emacs");
    }

    #[cfg(unix)]
    #[test]
    fn system_editor_reports_exit_status() {
        let path = Path::new("/dev/null");
        assert_eq!(SystemEditor.launch("true", path).unwrap(), EditorExit::Success);
        assert_eq!(
            SystemEditor.launch("false", path).unwrap(),
            EditorExit::Failed(Some(1))
        );
    }

    #[test]
    fn system_editor_missing_program_is_error() {
        let result = SystemEditor.launch("definitely-not-an-editor-3f9a", Path::new("x"));
        assert!(result.is_err());
    }
}
