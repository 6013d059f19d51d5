//! Scaffolder configuration.
//!
//! Handles loading, validating, and merging `entry.toml`. The file is
//! optional and lives in the site root, next to the generator's own config
//! (which this tool never reads). Stock defaults are overridden by whatever
//! keys the user file sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "content"   # Content tree, relative to the site root
//! posts_dir = "posts"       # Post entries, relative to content_dir
//! pages_dir = "pages"       # Page entries, relative to content_dir
//!
//! [defaults]
//! extension = "rst"         # Used when --ext is not given
//! status = "draft"          # Used when --status is not given
//! authors = []              # Used when no --author is given
//! editor = "vim"            # Used when neither --editor nor $EDITOR is set
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming::normalize_extension;
use crate::types::{ContentKind, Status};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILE_NAME: &str = "entry.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Scaffolder configuration loaded from `entry.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Content tree searched for existing entries.
    pub content_dir: String,
    /// Post root inside the content tree.
    pub posts_dir: String,
    /// Page root inside the content tree.
    pub pages_dir: String,
    /// Fallback values for request fields the operator left out.
    pub defaults: EntryDefaults,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            posts_dir: "posts".to_string(),
            pages_dir: "pages".to_string(),
            defaults: EntryDefaults::default(),
        }
    }
}

/// Per-entry defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntryDefaults {
    pub extension: String,
    pub status: Status,
    pub authors: Vec<String>,
    /// Editor program of last resort.
    pub editor: String,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            extension: "rst".to_string(),
            status: Status::Draft,
            authors: Vec::new(),
            editor: "vim".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Validate directory names and defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("content_dir", &self.content_dir),
            ("posts_dir", &self.posts_dir),
            ("pages_dir", &self.pages_dir),
        ] {
            if !is_relative_dir(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a non-empty relative path without '..', got {value:?}"
                )));
            }
        }
        if Path::new(&self.posts_dir) == Path::new(&self.pages_dir) {
            return Err(ConfigError::Validation(
                "posts_dir and pages_dir must differ".into(),
            ));
        }
        if normalize_extension(&self.defaults.extension).is_none() {
            return Err(ConfigError::Validation(format!(
                "defaults.extension is not a valid file extension: {:?}",
                self.defaults.extension
            )));
        }
        if self.defaults.editor.trim().is_empty() {
            return Err(ConfigError::Validation(
                "defaults.editor must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Content tree under `root`.
    pub fn content_root(&self, root: &Path) -> PathBuf {
        root.join(&self.content_dir)
    }

    /// Root directory for entries of `kind` under `root`.
    pub fn kind_root(&self, root: &Path, kind: ContentKind) -> PathBuf {
        let dir = match kind {
            ContentKind::Post => &self.posts_dir,
            ContentKind::Page => &self.pages_dir,
        };
        self.content_root(root).join(dir)
    }
}

fn is_relative_dir(value: &str) -> bool {
    let path = Path::new(value);
    !value.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ScaffoldConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `entry.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ScaffoldConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ScaffoldConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `entry.toml` in the site root, falling back to defaults.
pub fn load_config(root: &Path) -> Result<ScaffoldConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}
