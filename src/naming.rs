//! Centralized filename derivation for content entries.
//!
//! Every entry on disk is named `<slug>.<ext>`. The slug is derived from the
//! human title and is the only identity an entry has: two titles that
//! normalize to the same slug refer to the same file.
//!
//! ## Slugs
//!
//! Runs of anything that is not an ASCII letter or digit become a single
//! dash, the ends are trimmed, and the result is lowercased:
//! - `"My First Post"` → `"my-first-post"`
//! - `"Hello, World!"` → `"hello-world"`
//! - `"  C++ & Rust  "` → `"c-rust"`
//!
//! Slugs are idempotent: `slugify(&slugify(t)) == slugify(t)`.

/// Derive the filesystem slug for a title.
///
/// Returns an empty string when the title has no ASCII alphanumerics.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Normalize an operator-supplied file extension.
///
/// A single leading dot is accepted and stripped (`.md` → `md`). Returns
/// `None` for empty extensions and anything containing a path separator or
/// further dots at the start.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
        return None;
    }
    Some(ext.to_string())
}

/// File name for an entry: `<slug>.<ext>`.
pub fn entry_file_name(slug: &str, ext: &str) -> String {
    format!("{}.{}", slug, ext)
}
