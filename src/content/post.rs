//! Blog post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::frontmatter::FrontMatter;
use super::headings::extract_headings;
use crate::helpers::date::parse_date;
use crate::helpers::text::reading_time;

/// A heading inside a post body, used for table-of-contents navigation.
///
/// Only level 2 and 3 headings appear here; level 1 is the page title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading depth, 2 or 3
    pub level: u8,

    /// Display text with inline emphasis markers stripped
    pub text: String,

    /// Anchor id, slugified from the text
    pub id: String,
}

/// Lightweight post metadata, used in listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    /// Unique identifier derived from the file name (extension stripped)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date, used for sort ordering
    pub date: DateTime<Utc>,

    /// Short summary; empty when the author did not provide one
    pub excerpt: String,

    /// Tags in front-matter declaration order
    pub tags: Vec<String>,

    /// Estimated reading time in minutes, always at least 1
    pub reading_time: u32,
}

/// A full blog post, used in the detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier derived from the file name (extension stripped)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date, used for sort ordering
    pub date: DateTime<Utc>,

    /// Short summary; empty when the author did not provide one
    pub excerpt: String,

    /// Tags in front-matter declaration order
    pub tags: Vec<String>,

    /// Estimated reading time in minutes, always at least 1
    pub reading_time: u32,

    /// Raw markdown body, front-matter stripped
    pub content: String,

    /// Level 2 and 3 headings in document order
    pub headings: Vec<Heading>,
}

impl Post {
    /// Build a post from parsed front-matter and body text.
    ///
    /// Defaults are resolved here, once: a missing title becomes
    /// "Untitled", a missing date becomes the current time, a missing
    /// excerpt becomes the empty string. Derived fields (reading time,
    /// headings) are computed from the body.
    pub fn from_parts(slug: &str, fm: FrontMatter, body: &str) -> Self {
        let date = fm
            .date
            .as_deref()
            .and_then(parse_date)
            .unwrap_or_else(Utc::now);

        Self {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_else(|| "Untitled".to_string()),
            date,
            excerpt: fm.excerpt.unwrap_or_default(),
            tags: fm.tags,
            reading_time: reading_time(body),
            content: body.to_string(),
            headings: extract_headings(body),
        }
    }

    /// Strip body and headings for list views.
    pub fn metadata(&self) -> PostMetadata {
        PostMetadata {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date,
            excerpt: self.excerpt.clone(),
            tags: self.tags.clone(),
            reading_time: self.reading_time,
        }
    }
}
