//! CLI module - Command definitions and handlers

use clap::{Parser, Subcommand};

pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod post;
pub mod show;
pub mod utils;

/// inkwell - turn learning notes into AI-written articles
#[derive(Parser, Debug)]
#[command(name = "inkwell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "INKWELL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new inkwell directory
    Init(init::InitArgs),

    /// Generate an article from learning notes
    Create(create::CreateArgs),

    /// List articles (search, tag filter, pages)
    List(list::ListArgs),

    /// Show an article by ID
    Show(show::ShowArgs),

    /// Delete an article
    Delete(delete::DeleteArgs),

    /// Generate a short social post from an article
    Post(post::PostArgs),

    /// Get or set configuration
    Config(config::ConfigArgs),
}
