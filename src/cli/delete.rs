//! `inkwell delete` command
//!
//! Removes an article from the store.
//!
//! # Usage
//! ```bash
//! inkwell delete 01JA2B3C4D5E6F7G8H9J0KMNPQ
//! inkwell delete 01JA2B3C4D5E6F7G8H9J0KMNPQ --yes
//! ```

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::io::{self, Write};

use super::utils::{load_config, open_service};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Article ID
    pub id: String,

    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: DeleteArgs, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config);

    let Some(article) = service.get_article(&args.id) else {
        bail!("Article not found: {}", args.id);
    };

    // Confirm unless --yes
    if !args.yes {
        print!("Delete \"{}\"? [y/N] ", article.title.red());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if !service.delete_article(&args.id)? {
        bail!("Article not found: {}", args.id);
    }

    println!("{} Deleted: {}", "✓".green(), article.title);
    Ok(())
}
