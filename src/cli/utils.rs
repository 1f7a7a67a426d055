//! CLI utility functions
//!
//! Common helpers shared across commands:
//! - Config loading (explicit `--config` or discovered)
//! - Opening the article store
//! - Building the article service, with the configured generator attached
//!   only for commands that generate

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::core::store::ArticleStore;
use crate::generation::{GeminiClient, TextGenerator};
use crate::service::ArticleService;

/// Load config from `--config` if given, otherwise from default locations
pub fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(p) => Config::load_from(Path::new(p)),
        None => Config::load(),
    }
}

/// Open the article store the config points at
pub fn open_store(config: &Config) -> ArticleStore {
    let path = config.store_path();
    tracing::debug!("Using article store {}", path.display());
    ArticleStore::open(path)
}

/// Build the configured generation backend
pub fn generator(config: &Config) -> Result<Arc<dyn TextGenerator>> {
    match config.generation.provider.as_str() {
        "gemini" => {
            let client = GeminiClient::from_config(&config.generation)
                .context("Failed to set up Gemini client")?;
            Ok(Arc::new(client))
        }
        other => bail!("Unknown generation provider: {}. Supported: gemini", other),
    }
}

/// Service over the configured store; no API key needed
pub fn open_service(config: &Config) -> ArticleService {
    ArticleService::new(Arc::new(open_store(config)))
}

/// Service with the configured generator attached
pub fn open_generating_service(config: &Config) -> Result<ArticleService> {
    Ok(open_service(config).with_generator(generator(config)?))
}

/// Shorten `text` to `max` characters for one-line display
pub fn preview(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut out: String = flat.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
