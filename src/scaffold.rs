//! Entry scaffolding: resolve → decide → create → launch editor.
//!
//! One invocation makes exactly one pass through this state machine:
//!
//! ```text
//! Start → Resolve → Decide ─┬─ CreateNew ──→ Write ─┐
//!                           ├─ OpenExisting ────────┼→ LaunchEditor → End
//!                           └─ Fail (nothing touched)
//! ```
//!
//! ## Create vs. Edit
//!
//! | Intent       | Entry exists            | Entry missing          |
//! |--------------|-------------------------|------------------------|
//! | `Infer`      | open it                 | create it              |
//! | `CreateOnly` | `AlreadyExists` error   | create it              |
//! | `EditOnly`   | open it                 | `NotFound` error       |
//!
//! `Infer` is the default and is deliberately permissive: the operator who
//! forgot an entry exists ends up editing it instead of getting an error.
//!
//! "Exists" means a file named `<slug>.<ext>` anywhere under the content
//! tree, not just in the current year/month. New entries always go under the
//! current year/month; existing entries are opened where they were found.

use crate::config::{self, ConfigError, ScaffoldConfig};
use crate::editor::{EditorExit, EditorLauncher, SystemEditor, resolve_editor};
use crate::metadata::EntryHeader;
use crate::naming::{entry_file_name, normalize_extension, slugify};
use crate::scan::{self, ScanError};
use crate::types::{EntryRequest, Intent};
use chrono::{Datelike, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("File already exists: {} (drop --create to edit it)", .path.display())]
    AlreadyExists { path: PathBuf },
    #[error("File not found: {file_name} (drop --edit to create it)")]
    NotFound { file_name: String },
    #[error("Cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Cannot start editor '{editor}': {source}")]
    EditorLaunch { editor: String, source: io::Error },
    #[error("Title {title:?} has no letters or digits to build a slug from")]
    InvalidTitle { title: String },
    #[error("Invalid file extension: {ext:?}")]
    InvalidExtension { ext: String },
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Where an entry lives or would live.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub slug: String,
    /// `<slug>.<ext>`
    pub file_name: String,
    /// Path a new entry would be written to (current year/month).
    pub target: PathBuf,
    /// First existing file with the same name, if any.
    pub found: Option<PathBuf>,
    /// Further same-named files beyond `found`.
    pub duplicates: Vec<PathBuf>,
}

/// What to do with the resolved entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateNew(PathBuf),
    OpenExisting(PathBuf),
}

impl Action {
    pub fn path(&self) -> &Path {
        match self {
            Action::CreateNew(p) | Action::OpenExisting(p) => p,
        }
    }
}

/// Progress reported by [`Scaffolder::run`] as it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldEvent {
    Created(PathBuf),
    Found(PathBuf),
    /// More than one file carries the entry's name; `used` is opened.
    Duplicates { used: PathBuf, others: Vec<PathBuf> },
    EditorExited { editor: String, exit: EditorExit },
}

/// Decide create vs. open from the search result and the operator's intent.
pub fn decide(resolution: &Resolution, intent: Intent) -> Result<Action, ScaffoldError> {
    match (&resolution.found, intent) {
        (Some(path), Intent::CreateOnly) => Err(ScaffoldError::AlreadyExists { path: path.clone() }),
        (Some(path), _) => Ok(Action::OpenExisting(path.clone())),
        (None, Intent::EditOnly) => Err(ScaffoldError::NotFound {
            file_name: resolution.file_name.clone(),
        }),
        (None, _) => Ok(Action::CreateNew(resolution.target.clone())),
    }
}

/// Write `header` into a brand-new file at `path`.
///
/// Parent directories are created as needed and are not removed on failure.
/// An existing file at `path` is never overwritten. The data is synced to
/// disk before returning.
pub fn create(path: &Path, header: &EntryHeader) -> Result<(), ScaffoldError> {
    let write_err = |source| ScaffoldError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(header.render().as_bytes())
        .map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    Ok(())
}

/// Creates or locates entries under a site root and hands them to an editor.
pub struct Scaffolder<L = SystemEditor> {
    root: PathBuf,
    config: ScaffoldConfig,
    env_editor: Option<String>,
    launcher: L,
}

impl Scaffolder<SystemEditor> {
    pub fn new(root: impl Into<PathBuf>, config: ScaffoldConfig) -> Self {
        Self::with_launcher(root, config, SystemEditor)
    }

    /// Build a scaffolder for `root` using its `entry.toml` (or stock defaults).
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, ScaffoldError> {
        let root = root.into();
        let config = config::load_config(&root)?;
        Ok(Self::new(root, config))
    }
}

impl<L: EditorLauncher> Scaffolder<L> {
    pub fn with_launcher(root: impl Into<PathBuf>, config: ScaffoldConfig, launcher: L) -> Self {
        Self {
            root: root.into(),
            config,
            env_editor: None,
            launcher,
        }
    }

    /// Value of `$EDITOR` (or whatever the caller wants in its place).
    pub fn with_env_editor(mut self, editor: Option<String>) -> Self {
        self.env_editor = editor;
        self
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Compute the slug, the new-entry target, and search the content tree.
    pub fn resolve(
        &self,
        request: &EntryRequest,
        now: NaiveDateTime,
    ) -> Result<Resolution, ScaffoldError> {
        let slug = slugify(&request.title);
        if slug.is_empty() {
            return Err(ScaffoldError::InvalidTitle {
                title: request.title.clone(),
            });
        }
        let ext = normalize_extension(&request.extension).ok_or_else(|| {
            ScaffoldError::InvalidExtension {
                ext: request.extension.clone(),
            }
        })?;
        let file_name = entry_file_name(&slug, &ext);

        let target = self
            .config
            .kind_root(&self.root, request.kind)
            .join(format!("{}", now.year()))
            .join(format!("{:02}", now.month()))
            .join(&file_name);

        let content_root = self.config.content_root(&self.root);
        debug!(slug = %slug, root = %content_root.display(), "searching for {file_name}");
        let mut matches = scan::find_all(&content_root, &file_name)?.into_iter();
        let found = matches.next();
        let duplicates: Vec<PathBuf> = matches.collect();
        debug!(found = ?found, duplicates = duplicates.len(), "search done");

        Ok(Resolution {
            slug,
            file_name,
            target,
            found,
            duplicates,
        })
    }

    /// Open `path` in the resolved editor unless the request suppresses it.
    ///
    /// Returns `None` when no editor was run.
    pub fn launch_editor(
        &self,
        request: &EntryRequest,
        path: &Path,
    ) -> Result<Option<(String, EditorExit)>, ScaffoldError> {
        if request.suppress_editor {
            return Ok(None);
        }
        let editor = resolve_editor(
            request.editor_override.as_deref(),
            self.env_editor.as_deref(),
            &self.config.defaults.editor,
        );
        debug!(editor = %editor, path = %path.display(), "launching editor");
        let exit = self
            .launcher
            .launch(&editor, path)
            .map_err(|source| ScaffoldError::EditorLaunch {
                editor: editor.clone(),
                source,
            })?;
        Ok(Some((editor, exit)))
    }

    /// Run one full pass: resolve, decide, create if needed, launch editor.
    ///
    /// `report` sees each event as it happens, so a created file is announced
    /// before the editor takes over the terminal.
    pub fn run(
        &self,
        request: &EntryRequest,
        now: NaiveDateTime,
        mut report: impl FnMut(&ScaffoldEvent),
    ) -> Result<Action, ScaffoldError> {
        let resolution = self.resolve(request, now)?;
        let action = decide(&resolution, request.intent)?;
        debug!(action = ?action, "decided");

        match &action {
            Action::CreateNew(path) => {
                let header = EntryHeader::from_request(request, &resolution.slug, now);
                create(path, &header)?;
                report(&ScaffoldEvent::Created(path.clone()));
            }
            Action::OpenExisting(path) => {
                if !resolution.duplicates.is_empty() {
                    report(&ScaffoldEvent::Duplicates {
                        used: path.clone(),
                        others: resolution.duplicates.clone(),
                    });
                }
                report(&ScaffoldEvent::Found(path.clone()));
            }
        }

        if let Some((editor, exit)) = self.launch_editor(request, action.path())? {
            report(&ScaffoldEvent::EditorExited { editor, exit });
        }
        Ok(action)
    }
}
