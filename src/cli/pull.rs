//! `regpull pull` command implementation

use crate::engine::console::{ProcessConsole, StderrSink};
use crate::engine::login::PullOrchestrator;
use crate::registry::{
    CredentialResolver, EnvCredentialProvider, ImageSelection, PullOperation, PullOutcome,
    RegistrySelection,
};
use crate::telemetry::{Telemetry, TracingTelemetry};
use clap::Args;
use std::sync::Arc;

/// Arguments for the `pull` command
#[derive(Args)]
pub struct PullArgs {
    /// Image to pull, as shown by the registry (e.g. "webapp:v2"), or a
    /// repository name together with --all-tags
    pub image: String,

    /// Registry login server (e.g. "myregistry.example.com")
    #[arg(short, long)]
    pub registry: String,

    /// Download all tagged images in the repository
    #[arg(short, long)]
    pub all_tags: bool,

    /// Container engine binary to drive
    #[arg(long, default_value = crate::engine::DEFAULT_ENGINE)]
    pub engine: String,
}

/// Execute the `pull` command
pub async fn execute(args: PullArgs) -> anyhow::Result<()> {
    let selection = RegistrySelection::from_login_server(&args.registry);
    let image = if args.all_tags {
        ImageSelection::Repository {
            repository: args.image.clone(),
        }
    } else {
        ImageSelection::ImageTag {
            tag: args.image.clone(),
        }
    };
    let request = image.into_request();

    let resolver = CredentialResolver::new(Arc::new(EnvCredentialProvider::default()));
    let credentials = resolver.resolve(&selection).await?;

    let telemetry = TracingTelemetry;
    let console = Arc::new(ProcessConsole::new(&args.engine));
    let orchestrator =
        PullOrchestrator::new(&args.engine, Arc::new(StderrSink), console.clone());

    let mut operation = PullOperation::begin(&selection.login_server, request.clone());
    let result = orchestrator
        .pull(
            &selection.login_server,
            &request,
            &credentials.username,
            &credentials.password,
        )
        .await;

    match &result {
        Ok(()) => {
            operation.complete(PullOutcome::Succeeded);
            telemetry.track(operation.to_event(None));
        }
        Err(err) => {
            operation.complete(PullOutcome::Failed);
            telemetry.track(operation.to_event(Some(err.to_string())));
        }
    }
    result?;

    // Keep the terminal attached until the submitted pull exits; the pull's
    // own outcome is reported by the engine, not by this process.
    if let Some(code) = console.wait_idle().await? {
        if code != 0 {
            tracing::warn!("pull exited with status {}", code);
        }
    }

    Ok(())
}
