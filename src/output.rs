//! CLI output formatting.
//!
//! Operator-facing lines go to stdout; diagnostics go through `tracing` to
//! stderr. Each event has a `format_*` function (pure, returns lines) and
//! the binary prints what it returns.
//!
//! ```text
//! File created -> content/posts/2024/03/my-first-post.rst
//! File found -> content/posts/2023/11/my-first-post.rst
//! Warning: 2 files named my-first-post.rst, opening the first:
//!     content/posts/2023/11/my-first-post.rst
//!     content/pages/2022/01/my-first-post.rst
//! Warning: editor 'vim' exited with status 1
//! ```

use crate::editor::EditorExit;
use crate::scaffold::ScaffoldEvent;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_created(path: &Path) -> String {
    format!("File created -> {}", path.display())
}

pub fn format_found(path: &Path) -> String {
    format!("File found -> {}", path.display())
}

/// Warn that several files share the entry's name; `used` is listed first.
pub fn format_duplicates(used: &Path, others: &[std::path::PathBuf]) -> Vec<String> {
    let name = used
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut lines = vec![format!(
        "Warning: {} files named {}, opening the first:",
        others.len() + 1,
        name
    )];
    lines.push(format!("{}{}", indent(1), used.display()));
    for other in others {
        lines.push(format!("{}{}", indent(1), other.display()));
    }
    lines
}

/// Non-zero editor exits are reported, never fatal.
pub fn format_editor_exit(editor: &str, exit: EditorExit) -> Option<String> {
    match exit {
        EditorExit::Success => None,
        EditorExit::Failed(Some(code)) => Some(format!(
            "Warning: editor '{}' exited with status {}",
            editor, code
        )),
        EditorExit::Failed(None) => Some(format!(
            "Warning: editor '{}' was terminated by a signal",
            editor
        )),
    }
}

/// Lines for one scaffolding event.
pub fn format_event(event: &ScaffoldEvent) -> Vec<String> {
    match event {
        ScaffoldEvent::Created(path) => vec![format_created(path)],
        ScaffoldEvent::Found(path) => vec![format_found(path)],
        ScaffoldEvent::Duplicates { used, others } => format_duplicates(used, others),
        ScaffoldEvent::EditorExited { editor, exit } => {
            format_editor_exit(editor, *exit).into_iter().collect()
        }
    }
}

pub fn print_event(event: &ScaffoldEvent) {
    for line in format_event(event) {
        println!("{}", line);
    }
}
