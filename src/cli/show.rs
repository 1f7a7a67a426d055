//! `inkwell show` command
//!
//! Shows an article by ID.
//!
//! # Usage
//! ```bash
//! inkwell show 01JA2B3C4D5E6F7G8H9J0KMNPQ
//! inkwell show 01JA2B3C4D5E6F7G8H9J0KMNPQ --format json
//! inkwell show 01JA2B3C4D5E6F7G8H9J0KMNPQ --format html > post.html
//! ```

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use super::utils::{load_config, open_service};
use crate::core::article::Article;

#[derive(ValueEnum, Clone, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Pretty,
    /// The stored JSON record
    Json,
    /// Only the HTML body
    Html,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Article ID
    pub id: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

pub fn run(args: ShowArgs, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let Some(article) = open_service(&config).get_article(&args.id) else {
        bail!("Article not found: {}", args.id);
    };

    print_article(&article, &args.format)
}

pub fn print_article(article: &Article, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(article)?);
        }
        OutputFormat::Html => {
            println!("{}", article.content);
        }
        OutputFormat::Pretty => print_pretty(article),
    }
    Ok(())
}

fn print_pretty(article: &Article) {
    println!("{}", "─".repeat(50));
    println!("📄 {}", article.title.bold());
    println!("{}", "─".repeat(50));
    println!("ID:       {}", article.id);
    if !article.summary.is_empty() {
        println!("Summary:  {}", article.summary);
    }
    if !article.tags.is_empty() {
        println!("Tags:     {}", article.tags.join(", "));
    }
    println!(
        "Reading:  {} min ({} words)",
        article.metadata.reading_time, article.metadata.word_count
    );
    println!("Created:  {}", article.created_at);
    println!();
    println!("{}", article.content);
    println!("{}", "─".repeat(50));
}
