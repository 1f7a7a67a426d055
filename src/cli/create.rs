//! `inkwell create` command
//!
//! Sends learning notes to the model and stores the resulting article.
//!
//! # Usage
//! ```bash
//! inkwell create "Today I learned how Pin works"
//! inkwell create --file notes.md
//! inkwell create --file notes.md --format json
//! ```

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::fs;

use super::show::{print_article, OutputFormat};
use super::utils::{load_config, open_generating_service};

/// Maximum accepted learning content, in characters
pub const MAX_LEARNING_CHARS: usize = 10_000;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Learning notes (or use --file)
    pub content: Option<String>,

    /// Read notes from file
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

pub async fn run(args: CreateArgs, config_path: Option<&str>) -> Result<()> {
    let content = match (&args.file, &args.content) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(text)) => text.clone(),
        (None, None) => bail!("Provide learning notes as an argument or with --file."),
    };
    validate_learning_content(&content)?;

    let config = load_config(config_path)?;
    let service = open_generating_service(&config)?;

    eprintln!("{} Generating article...", "✍".cyan());
    let article = service.create_article(&content).await?;

    if matches!(args.format, OutputFormat::Pretty) {
        println!("{} Article created: {}", "✓".green(), article.id.cyan().bold());
    }
    print_article(&article, &args.format)
}

/// Notes must be 1..=10000 characters
pub fn validate_learning_content(content: &str) -> Result<()> {
    let chars = content.chars().count();
    if content.trim().is_empty() {
        bail!("Learning content is empty.");
    }
    if chars > MAX_LEARNING_CHARS {
        bail!(
            "Learning content is too long ({} characters, max {}).",
            chars,
            MAX_LEARNING_CHARS
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bounds() {
        assert!(validate_learning_content("x").is_ok());
        assert!(validate_learning_content(&"あ".repeat(MAX_LEARNING_CHARS)).is_ok());
        assert!(validate_learning_content(&"x".repeat(MAX_LEARNING_CHARS + 1)).is_err());
        assert!(validate_learning_content("   \n").is_err());
    }
}
