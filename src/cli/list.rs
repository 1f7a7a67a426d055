//! `inkwell list` command
//!
//! Lists stored articles, newest first.
//!
//! # Usage
//! ```bash
//! inkwell list
//! inkwell list --search tokio
//! inkwell list --tags rust,async --page 2 --page-size 5
//! inkwell list --format json
//! ```

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::utils::{load_config, open_service, preview};
use crate::core::query::{ArticlePage, ListQuery};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against title, summary and tags
    #[arg(short, long)]
    pub search: Option<String>,

    /// Comma-separated tags (any match)
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Articles per page (default from config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub fn run(args: ListArgs, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let page_size = args.page_size.unwrap_or(config.list.default_page_size);

    if args.page == 0 || page_size == 0 {
        bail!("--page and --page-size must be at least 1.");
    }

    let mut q = ListQuery::new().with_page(args.page, page_size);
    q.search = args.search.filter(|s| !s.is_empty());
    q.tags = args.tags.filter(|t| !t.is_empty());

    let page = open_service(&config).list_articles(&q);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&page)?),
        _ => print_pretty(&page),
    }

    Ok(())
}

fn print_pretty(page: &ArticlePage) {
    if page.articles.is_empty() {
        if page.total == 0 {
            println!("No articles found.");
        } else {
            println!("No articles on page {} ({} total).", page.page, page.total);
        }
        return;
    }

    let pages = page.total.div_ceil(page.page_size);
    println!(
        "\n📚 {} article(s), page {}/{}\n",
        page.total, page.page, pages
    );

    for article in &page.articles {
        println!("{}  {}", article.id.dimmed(), article.title.bold());
        if !article.summary.is_empty() {
            println!("   {}", preview(&article.summary, 100));
        }
        let tags = if article.tags.is_empty() {
            "-".to_string()
        } else {
            article.tags.join(", ")
        };
        println!(
            "   {} | {} min | {}\n",
            tags.cyan(),
            article.metadata.reading_time,
            article.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}
