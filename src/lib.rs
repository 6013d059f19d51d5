//! # Entry Scaffold
//!
//! Scaffolds blog posts and pages for a static site generator: turns a title
//! into a slugged file under `content/<posts|pages>/<year>/<month>/`, stamps
//! it with a metadata header, and opens it in an editor. If an entry with the
//! same name already exists anywhere in the content tree, it is opened
//! instead of duplicated.
//!
//! The site generator itself, its theme, plugins, and site-level settings
//! are untouched. This crate only prepares a file for a human to edit.
//!
//! # One Pass Per Invocation
//!
//! ```text
//! resolve   title → slug → search content/ for <slug>.<ext>
//! decide    found/missing × --create/--edit → create | open | error
//! create    mkdir -p, write header, fsync
//! edit      $EDITOR <path>, wait
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scaffold`] | The resolve/decide/create/launch pipeline and its error type |
//! | [`naming`] | Slug derivation and entry file names |
//! | [`scan`] | Recursive search of the content tree |
//! | [`metadata`] | Header block rendering |
//! | [`editor`] | Editor resolution and the process launcher seam |
//! | [`config`] | Optional `entry.toml` loading, merging, and validation |
//! | [`types`] | The request and its enums |
//! | [`output`] | Operator-facing line formatting |
//!
//! # Design Decisions
//!
//! ## No Process-Wide State
//!
//! The site root and [`config::ScaffoldConfig`] are handed to
//! [`scaffold::Scaffolder::new`] (or read from `<root>/entry.toml` by
//! [`scaffold::Scaffolder::load`]); nothing reads the working directory
//! behind the caller's back. `$EDITOR` is likewise passed in by the binary.
//!
//! ## Search the Whole Tree
//!
//! Entries are filed by creation date, so yesterday's draft lives under a
//! different month than today's target path. Existence is decided by file
//! name anywhere under `content/`, not by the target path.
//!
//! ## Editor Exit Status Is Advisory
//!
//! A non-zero exit from the editor is reported as a warning. Failing to
//! start the editor at all is an error, but the file written before it stays.

pub mod config;
pub mod editor;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scaffold;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
