//! Shared types for the scaffolding pipeline.
//!
//! An [`EntryRequest`] is built once by the CLI (or any other caller) and
//! flows unchanged through resolve → decide → create → launch editor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which content root an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Page,
}

/// Publication status written into the header.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Draft,
    Hidden,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Hidden => "hidden",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strictly the operator wants create vs. edit enforced.
///
/// `Infer` is the permissive default: an existing entry is opened, a
/// missing one is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    #[default]
    Infer,
    /// Fail if the entry already exists anywhere in the content tree.
    CreateOnly,
    /// Fail if the entry does not exist yet.
    EditOnly,
}

/// Everything the operator asked for in one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRequest {
    pub title: String,
    pub kind: ContentKind,
    /// Unique tags in first-seen order. Use [`EntryRequest::add_tag`] to keep
    /// the set property.
    pub tags: Vec<String>,
    pub authors: Vec<String>,
    pub category: String,
    pub summary: String,
    pub status: Status,
    pub extension: String,
    pub intent: Intent,
    pub suppress_editor: bool,
    pub editor_override: Option<String>,
}

impl EntryRequest {
    /// A request with every optional field at its documented default.
    pub fn new(title: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            title: title.into(),
            kind,
            tags: Vec::new(),
            authors: Vec::new(),
            category: String::new(),
            summary: String::new(),
            status: Status::Draft,
            extension: "rst".to_string(),
            intent: Intent::Infer,
            suppress_editor: false,
            editor_override: None,
        }
    }

    /// Add a tag unless it is already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
        self
    }
}
