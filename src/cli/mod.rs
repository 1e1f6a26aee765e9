//! CLI command definitions and handlers

pub mod pull;
pub mod status;

use clap::{Parser, Subcommand};

/// Regpull - a credential-resolving pull helper for container registries
#[derive(Parser)]
#[command(name = "regpull")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in to a registry and pull an image
    Pull(pull::PullArgs),

    /// Show whether the engine appears logged in to a registry
    Status(status::StatusArgs),
}
