//! `inkwell config` command
//!
//! Get or set configuration values.
//!
//! # Usage
//! ```bash
//! inkwell config                              # Show config file
//! inkwell config generation.model             # Get specific value
//! inkwell config generation.model gemini-2.5-pro   # Set value
//! inkwell config list.default_page_size 20 --global
//! inkwell config --path
//! inkwell --config team.toml config generation.model gemini-2.5-pro
//! ```
//!
//! An explicit `--config` file (or `INKWELL_CONFIG`) wins over `--global`
//! and over discovery.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::config::{Config, INKWELL_DIR};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config key (e.g., generation.model, list.default_page_size)
    pub key: Option<String>,

    /// Value to set
    pub value: Option<String>,

    /// List all config values
    #[arg(long)]
    pub list: bool,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Use global config (~/.inkwell/config.toml) instead of local
    #[arg(short, long)]
    pub global: bool,
}

fn get_config_path(global: bool) -> PathBuf {
    if global {
        Config::global_config_path().unwrap_or_else(|| Config::config_file_in(Path::new(INKWELL_DIR)))
    } else {
        Config::find_local_config().unwrap_or_else(|| Config::config_file_in(Path::new(INKWELL_DIR)))
    }
}

/// File the command reads and edits
fn target_path(explicit: Option<&str>, global: bool) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => get_config_path(global),
    }
}

pub fn run(args: ConfigArgs, explicit: Option<&str>) -> Result<()> {
    let config_path = target_path(explicit, args.global);

    if args.path {
        println!("Global: {}", get_config_path(true).display());
        println!("Local:  {}", get_config_path(false).display());
        if let Some(p) = explicit {
            println!("Explicit: {}", p);
        }
        println!();
        if config_path.exists() {
            println!("✓ Active: {}", config_path.display());
        } else {
            println!("⚠ No config file found at {}", config_path.display());
        }
        return Ok(());
    }

    if args.list || (args.key.is_none() && args.value.is_none()) {
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            println!("📋 Configuration ({}):\n", config_path.display());
            println!("{}", content);
        } else {
            println!("📋 No config file at {}", config_path.display());
            println!();
            println!("Create one with:");
            println!("  inkwell init");
            println!("  inkwell config generation.model gemini-2.5-flash");
        }
        return Ok(());
    }

    if let Some(key) = &args.key {
        if let Some(value) = &args.value {
            set_config_value(&config_path, key, value)?;
            println!("✅ Set {} = {} (in {})", key, value, config_path.display());
        } else {
            match get_config_value(&config_path, key)? {
                Some(v) => println!("{}", v),
                None => println!("(not set)"),
            }
        }
    }

    Ok(())
}

/// Set a nested config value using dot notation (e.g., "generation.model")
fn set_config_value(path: &Path, key: &str, val: &str) -> Result<()> {
    use toml_edit::{value, DocumentMut};

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut doc: DocumentMut = content.parse().context("Failed to parse config.toml")?;

    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        [top] => {
            doc[*top] = value(parse_toml_value(val));
        }
        [section, field] => {
            if doc.get(section).is_none() {
                doc[*section] = toml_edit::table();
            }
            doc[*section][*field] = value(parse_toml_value(val));
        }
        _ => anyhow::bail!("Key too deep: {}. Max depth is section.key", key),
    }

    // Reject values that would make the config unloadable
    toml::from_str::<Config>(&doc.to_string())
        .with_context(|| format!("Invalid value for {}: {}", key, val))?;

    fs::write(path, doc.to_string())?;
    Ok(())
}

/// Get a config value by dot notation key
fn get_config_value(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let doc: toml::Table = toml::from_str(&content).context("Failed to parse config.toml")?;

    let parts: Vec<&str> = key.split('.').collect();

    let val = match parts.as_slice() {
        [top] => doc.get(*top),
        [section, field] => doc.get(*section).and_then(|t| t.get(*field)),
        _ => None,
    };

    Ok(val.map(|v| match v {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }))
}

/// Parse string value to appropriate TOML type
fn parse_toml_value(s: &str) -> toml_edit::Value {
    if let Ok(b) = s.parse::<bool>() {
        return b.into();
    }
    if let Ok(i) = s.parse::<i64>() {
        return i.into();
    }
    if let Ok(f) = s.parse::<f64>() {
        return f.into();
    }
    s.into()
}
