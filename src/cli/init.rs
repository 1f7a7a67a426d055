//! `inkwell init` command
//!
//! Creates an `.inkwell/` directory with a config file and an empty article
//! store.
//!
//! # Usage
//! ```bash
//! inkwell init                    # Initialize in current directory
//! inkwell init /path/to/project   # Initialize in specific path
//! inkwell init --global           # Initialize global ~/.inkwell
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::{Config, INKWELL_DIR};
use crate::core::store::ArticleStore;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to initialize (default: current directory)
    pub path: Option<PathBuf>,

    /// Initialize global ~/.inkwell
    #[arg(long)]
    pub global: bool,

    /// Force re-initialization (existing articles are kept)
    #[arg(short, long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    // 1. Determine target directory
    let inkwell_dir = if args.global {
        Config::global_dir().context("Could not determine home directory")?
    } else {
        args.path
            .unwrap_or_else(|| PathBuf::from("."))
            .join(INKWELL_DIR)
    };

    // 2. Check if already initialized
    if inkwell_dir.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to reinitialize.",
            inkwell_dir.display()
        );
    }

    println!("🚀 Initializing inkwell in: {}", inkwell_dir.display());
    fs::create_dir_all(&inkwell_dir)?;

    // 3. Config file
    let config_path = Config::config_file_in(&inkwell_dir);
    Config::default().save_to(&config_path)?;

    // 4. Empty store (left alone if it already has articles)
    let store_path = Config::store_file_in(&inkwell_dir);
    ArticleStore::open(&store_path)
        .initialize()
        .context("Failed to create article store")?;

    println!("\n✅ Initialized inkwell");
    println!("   Config: {}", config_path.display());
    println!("   Store:  {}", store_path.display());
    println!("\nNext steps:");
    println!("  export {}=...", crate::config::API_KEY_ENV);
    println!("  inkwell create \"What I learned today\"");
    println!("  inkwell list");

    Ok(())
}
