//! Article - Core data structure
//!
//! An article is a generated blog-style document built from learning notes.
//!
//! # Key Properties
//! - **id**: ULID string (opaque, immutable)
//! - **content**: HTML body as produced by the model (not sanitized here)
//! - **tags**: ordered, duplicates allowed
//! - **metadata**: reading time / word count, always present
//!
//! The serialized shape (camelCase field names) is the on-disk contract that
//! other processes read directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Reading statistics attached to every article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    /// Estimated reading time in minutes (>= 1)
    pub reading_time: u32,

    /// Word count (>= 0)
    pub word_count: u32,
}

impl ArticleMetadata {
    pub fn new(reading_time: u32, word_count: u32) -> Self {
        Self {
            reading_time: reading_time.max(1),
            word_count,
        }
    }
}

impl Default for ArticleMetadata {
    fn default() -> Self {
        Self {
            reading_time: 1,
            word_count: 0,
        }
    }
}

/// Everything the model produces for an article.
///
/// The caller supplies `id` and timestamps when turning a draft into an
/// [`Article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub summary: String,
    pub html_content: String,
    pub tags: Vec<String>,
    pub metadata: ArticleMetadata,
}

/// A persisted article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub summary: String,

    /// HTML body
    pub content: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Synthesized as the default when the stored record lacks it
    #[serde(default)]
    pub metadata: ArticleMetadata,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Build a new article from a generated draft
    pub fn from_draft(draft: ArticleDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// Build a new article with an explicit creation time
    pub fn from_draft_at(draft: ArticleDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            title: draft.title,
            summary: draft.summary,
            content: draft.html_content,
            tags: draft.tags,
            metadata: draft.metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.title)
    }
}

/// A short-form post derived from an article. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub content: String,

    /// Character length of `content`, always computed locally
    pub character_count: usize,
}

impl SocialPost {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let character_count = content.chars().count();
        Self {
            content,
            character_count,
        }
    }
}
