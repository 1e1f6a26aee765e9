//! Regpull - a credential-resolving pull helper for container registries
//!
//! This crate resolves registry credentials through a pluggable provider,
//! performs a non-interactive login against the local container engine,
//! and submits the image pull to a console surface.

pub mod cli;
pub mod engine;
pub mod registry;
pub mod telemetry;

use thiserror::Error;

/// Main error type for Regpull operations
#[derive(Error, Debug)]
pub enum RegpullError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Credential resolution failed: {0}")]
    AuthResolution(String),

    #[error("{0}")]
    CredentialStoreDefect(String),

    #[error("Login failed: {0}")]
    Login(String),

    #[error("Process spawn error: {0}")]
    Spawn(String),

    #[error("Console error: {0}")]
    Console(String),
}

pub type Result<T> = std::result::Result<T, RegpullError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "regpull";
