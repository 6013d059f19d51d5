//! Shared test utilities for the entry-scaffold test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let existing = touch(tmp.path(), "content/posts/2023/11/hello.rst");
//! let before = snapshot(tmp.path());
//! // ... run something that must not write ...
//! assert_eq!(snapshot(tmp.path()), before);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// Build a fixed local timestamp.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("invalid test timestamp {year}-{month}-{day} {hour}:{minute}"))
}

/// Create an empty file (and its parents) at `root/rel`, returning its path.
pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "").unwrap();
    path
}

/// Contents and mtime of every file under `root`, keyed by relative path.
///
/// Directories are recorded with empty contents so that newly created
/// (empty) directories also show up as a difference.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, (Vec<u8>, Option<SystemTime>)> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let meta = e.metadata().unwrap();
            let bytes = if meta.is_file() {
                std::fs::read(e.path()).unwrap()
            } else {
                Vec::new()
            };
            let mtime = if meta.is_file() { meta.modified().ok() } else { None };
            (rel, (bytes, mtime))
        })
        .collect()
}
