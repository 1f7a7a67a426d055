//! inkwell - learning notes to AI-written articles
//!
//! Feed in free-text notes, get back a structured article (title, summary,
//! HTML body, tags, reading metadata) stored in a JSON collection. Stored
//! articles can be turned into short social posts.
//!
//! ## Key Concepts
//!
//! - **Never-failing parsers**: malformed model output degrades to a
//!   fallback article or post, never an error
//! - **Whole-collection store**: one JSON array, mutations serialized by a
//!   single lock
//! - **Injected generator**: the model backend is a [`generation::TextGenerator`]
//!   passed into [`ArticleService`]

pub mod cli;
pub mod config;
pub mod core;
pub mod generation;
pub mod service;

pub use core::article::{Article, ArticleDraft, ArticleMetadata, SocialPost};
pub use core::query::{ArticlePage, ListQuery};
pub use core::store::{ArticleStore, BlobStore, FileBlobStore, MemoryBlobStore, StoreError};
pub use generation::{GeminiClient, GenerationClient, GenerationError, Prompt, TextGenerator};
pub use service::{ArticleService, ServiceError};
