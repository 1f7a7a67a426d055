//! Core module - Business logic
//!
//! Data model, article store, list queries and the parsers that turn model
//! replies into articles and posts.

pub mod article;
pub mod content;
pub mod extract;
pub mod query;
pub mod social;
pub mod store;
