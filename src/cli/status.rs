//! `regpull status` command implementation

use crate::engine::config;
use crate::telemetry::TracingTelemetry;
use clap::Args;

/// Arguments for the `status` command
#[derive(Args)]
pub struct StatusArgs {
    /// Registry login server to check
    #[arg(short, long)]
    pub registry: String,
}

/// Execute the `status` command
pub async fn execute(args: StatusArgs) -> anyhow::Result<()> {
    let probe = config::probe_login(&args.registry, &TracingTelemetry)?;

    let state = if probe.logged_in {
        "logged in"
    } else {
        "not logged in"
    };
    println!(
        "{}: {} (per {})",
        args.registry,
        state,
        probe.config_path.display()
    );

    Ok(())
}
