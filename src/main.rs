//! Regpull CLI entry point
//!
//! A credential-resolving pull helper for remote container registries.

use clap::Parser;
use regpull::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pull(args) => regpull::cli::pull::execute(args).await,
        Commands::Status(args) => regpull::cli::status::execute(args).await,
    }
}
