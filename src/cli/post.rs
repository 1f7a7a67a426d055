//! `inkwell post` command
//!
//! Generates a short social post (max 100 characters) for a stored article.
//! Posts are printed, never stored.
//!
//! # Usage
//! ```bash
//! inkwell post 01JA2B3C4D5E6F7G8H9J0KMNPQ
//! inkwell post 01JA2B3C4D5E6F7G8H9J0KMNPQ --format json
//! ```

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::utils::{generator, load_config, open_service};
use crate::core::social::MAX_POST_CHARS;

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Article ID
    pub id: String,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub async fn run(args: PostArgs, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;

    let service = open_service(&config);

    // Unknown ids fail before a generator (and API key) is needed
    if service.get_article(&args.id).is_none() {
        bail!("Article not found: {}", args.id);
    }

    let service = service.with_generator(generator(&config)?);
    let Some(post) = service.social_post(&args.id).await? else {
        bail!("Article not found: {}", args.id);
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&post)?),
        _ => {
            println!("{}", post.content);
            println!(
                "\n{}",
                format!("{}/{} characters", post.character_count, MAX_POST_CHARS).dimmed()
            );
        }
    }

    Ok(())
}
