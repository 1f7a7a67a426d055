//! inkwell CLI - Entry point
//!
//! Usage: inkwell <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use inkwell::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (RUST_LOG wins over --verbose)
    let default_level = if cli.verbose { "inkwell=debug" } else { "inkwell=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init(args) => inkwell::cli::init::run(args),
        Commands::Create(args) => inkwell::cli::create::run(args, config).await,
        Commands::List(args) => inkwell::cli::list::run(args, config),
        Commands::Show(args) => inkwell::cli::show::run(args, config),
        Commands::Delete(args) => inkwell::cli::delete::run(args, config),
        Commands::Post(args) => inkwell::cli::post::run(args, config).await,
        Commands::Config(args) => inkwell::cli::config::run(args, config),
    }
}
