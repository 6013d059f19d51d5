//! Entry header rendering.
//!
//! New entries start with a reStructuredText field list that the site
//! generator reads as metadata:
//!
//! ```text
//! :title: My First Post
//! :slug: my-first-post
//! :date: 2024-03-05 14:30
//! :athuors: jdoe
//! :tags: intro,sample
//! :category: general
//! :summary:
//! :status: draft
//! ```
//!
//! The `:athuors:` key is spelled the way the downstream metadata schema
//! expects it and must not be corrected. Lists are comma-joined without
//! spaces. Empty values leave the bare key with no trailing space.

use crate::types::{EntryRequest, Status};
use chrono::NaiveDateTime;

/// Timestamp layout used in the `:date:` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Metadata written at the top of a newly created entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryHeader {
    pub title: String,
    pub slug: String,
    pub date: NaiveDateTime,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub summary: String,
    pub status: Status,
}

impl EntryHeader {
    pub fn from_request(request: &EntryRequest, slug: &str, date: NaiveDateTime) -> Self {
        Self {
            title: request.title.clone(),
            slug: slug.to_string(),
            date,
            authors: request.authors.clone(),
            tags: request.tags.clone(),
            category: request.category.clone(),
            summary: request.summary.clone(),
            status: request.status,
        }
    }

    /// Render the header block, one field per line, newline-terminated.
    pub fn render(&self) -> String {
        let date = self.date.format(DATE_FORMAT).to_string();
        let authors = self.authors.join(",");
        let tags = self.tags.join(",");
        let fields: [(&str, &str); 8] = [
            ("title", &self.title),
            ("slug", &self.slug),
            ("date", &date),
            ("athuors", &authors),
            ("tags", &tags),
            ("category", &self.category),
            ("summary", &self.summary),
            ("status", self.status.as_str()),
        ];

        let mut out = String::new();
        for (key, value) in fields {
            out.push_str(&field_line(key, value));
            out.push('\n');
        }
        out
    }
}

fn field_line(key: &str, value: &str) -> String {
    // Newlines would end the field list early
    let value = value.replace(['\r', '\n'], " ");
    let value = value.trim();
    if value.is_empty() {
        format!(":{}:", key)
    } else {
        format!(":{}: {}", key, value)
    }
}
