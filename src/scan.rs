//! Content tree search.
//!
//! Entries are filed under `<kind>/<year>/<month>/`, but an entry written
//! last year is still the same entry today. Before creating anything the
//! scaffolder walks the *whole* content tree (posts and pages alike) looking
//! for a file with exactly the entry's name.
//!
//! ```text
//! content/
//! ├── posts/
//! │   ├── 2023/11/my-first-post.rst    ← found, even though "now" is 2024/03
//! │   └── 2024/03/
//! └── pages/
//!     └── 2024/01/about.rst
//! ```
//!
//! Every subdirectory is entered, hidden ones included. Symlinked files
//! count as entries; symlinked directories are not followed. Directory
//! entries are visited in file-name order so the first match is
//! deterministic.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read content tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Return every file named `file_name` under `content_root`, in walk order.
///
/// A missing content root simply has no matches.
pub fn find_all(content_root: &Path, file_name: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !content_root.is_dir() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for entry in WalkDir::new(content_root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_name() == file_name && is_file_or_file_link(&entry) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Symlinked entries count when they resolve to a file.
fn is_file_or_file_link(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::touch;
    use tempfile::TempDir;

    #[test]
    fn missing_root_has_no_match() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("content");
        assert!(find_all(&root, "a.rst").unwrap().is_empty());
    }

    #[test]
    fn finds_entry_in_older_month() {
        let tmp = TempDir::new().unwrap();
        let path = touch(tmp.path(), "posts/2023/11/my-first-post.rst");
        assert_eq!(
            find_all(tmp.path(), "my-first-post.rst").unwrap(),
            vec![path]
        );
    }

    #[test]
    fn finds_entry_across_kinds() {
        let tmp = TempDir::new().unwrap();
        let path = touch(tmp.path(), "pages/2024/01/about.rst");
        assert_eq!(find_all(tmp.path(), "about.rst").unwrap(), vec![path]);
    }

    #[test]
    fn name_must_match_exactly() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "posts/2024/03/my-first-post.md");
        touch(tmp.path(), "posts/2024/03/my-first-post.rst.bak");
        assert!(find_all(tmp.path(), "my-first-post.rst").unwrap().is_empty());
    }

    #[test]
    fn directories_with_the_name_are_ignored() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("posts/hello.rst")).unwrap();
        assert!(find_all(tmp.path(), "hello.rst").unwrap().is_empty());
    }

    #[test]
    fn hidden_directories_searched() {
        let tmp = TempDir::new().unwrap();
        let path = touch(tmp.path(), "posts/.archive/2023/11/my-first-post.rst");
        assert_eq!(
            find_all(tmp.path(), "my-first-post.rst").unwrap(),
            vec![path]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_counts_as_entry() {
        let tmp = TempDir::new().unwrap();
        let real = touch(tmp.path(), "drafts/hello.rst");
        let link = tmp.path().join("content/posts/2023/01/hello.rst");
        std::fs::create_dir_all(link.parent().unwrap()).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let content = tmp.path().join("content");
        assert_eq!(find_all(&content, "hello.rst").unwrap(), vec![link]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_not_followed() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "elsewhere/hello.rst");
        std::fs::create_dir_all(tmp.path().join("content")).unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("elsewhere"),
            tmp.path().join("content/linked"),
        )
        .unwrap();

        let content = tmp.path().join("content");
        assert!(find_all(&content, "hello.rst").unwrap().is_empty());
    }

    #[test]
    fn first_match_is_in_name_order() {
        let tmp = TempDir::new().unwrap();
        let older = touch(tmp.path(), "posts/2022/05/hello.rst");
        let newer = touch(tmp.path(), "posts/2024/01/hello.rst");
        assert_eq!(find_all(tmp.path(), "hello.rst").unwrap(), vec![older, newer]);
    }
}
