//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the per-project directory (like `.git`)
pub const INKWELL_DIR: &str = ".inkwell";

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the article store location
pub const STORE_ENV: &str = "INKWELL_STORE";

const STORE_FILE: &str = "articles.json";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub list: ListConfig,
}

/// Text generation backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key (the GEMINI_API_KEY environment variable takes precedence)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_generation_timeout(),
        }
    }
}

impl GenerationConfig {
    /// API key from the environment, else from config
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    crate::generation::DEFAULT_ENDPOINT.to_string()
}

fn default_generation_timeout() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Explicit store file (default: discovered `.inkwell/articles.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

impl Config {
    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find local .inkwell/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        find_up(CONFIG_FILE)
    }

    /// Find local .inkwell/articles.json walking up directories
    pub fn find_local_store() -> Option<PathBuf> {
        find_up(STORE_FILE)
    }

    /// Global inkwell directory (~/.inkwell)
    pub fn global_dir() -> Option<PathBuf> {
        directories::UserDirs::new().map(|u| u.home_dir().join(INKWELL_DIR))
    }

    /// Get global config path (~/.inkwell/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|d| d.join(CONFIG_FILE))
    }

    /// Store file location inside an inkwell directory
    pub fn store_file_in(dir: &Path) -> PathBuf {
        dir.join(STORE_FILE)
    }

    /// Config file location inside an inkwell directory
    pub fn config_file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Get article store path with priority:
    /// 1. INKWELL_STORE env var
    /// 2. `store.path` from config
    /// 3. Local .inkwell/articles.json (walking up from CWD)
    /// 4. Local .inkwell/ directory (even without articles.json yet)
    /// 5. Global ~/.inkwell/articles.json
    pub fn store_path(&self) -> PathBuf {
        if let Ok(env_path) = std::env::var(STORE_ENV) {
            return PathBuf::from(env_path);
        }

        if let Some(path) = &self.store.path {
            return path.clone();
        }

        if let Some(local) = Self::find_local_store() {
            return local;
        }

        if let Some(dir) = Self::find_local_config().as_deref().and_then(Path::parent) {
            return Self::store_file_in(dir);
        }

        if let Some(global) = Self::global_dir() {
            return Self::store_file_in(&global);
        }

        PathBuf::from(INKWELL_DIR).join(STORE_FILE)
    }
}

/// Walk up from CWD looking for `.inkwell/<file>`
fn find_up(file: &str) -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let candidate = current.join(INKWELL_DIR).join(file);
        if candidate.exists() {
            return Some(candidate);
        }

        if !current.pop() {
            break;
        }
    }

    None
}
