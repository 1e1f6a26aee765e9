//! Non-interactive engine login and authenticated pull orchestration

use crate::engine::config::engine_config_path;
use crate::engine::console::{Console, OutputSink};
use crate::registry::credentials::{Secret, SECRET_MASK};
use crate::registry::selection::ImageRequest;
use crate::{RegpullError, Result};
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Both patterns must appear in the login diagnostics to identify the known
/// credential-store defect. Matching is verbatim against the upstream tool's
/// error text; if that text changes the generic login failure applies.
const CRED_STORE_DEFECT_PATTERNS: [&str; 2] =
    ["error storing credentials", "The stub received bad data"];

/// Performs the login-then-pull protocol against the local container engine
///
/// The orchestrator logs in non-interactively (password over stdin), echoes
/// masked diagnostics to the output sink, diagnoses the known
/// credential-store defect, and on success submits the pull to the console
/// surface without waiting for it.
pub struct PullOrchestrator {
    engine: String,
    sink: Arc<dyn OutputSink>,
    console: Arc<dyn Console>,
}

impl PullOrchestrator {
    pub fn new(
        engine: impl Into<String>,
        sink: Arc<dyn OutputSink>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            engine: engine.into(),
            sink,
            console,
        }
    }

    /// Log in to `login_server` as `username` and submit the pull for `request`.
    ///
    /// Suspends while the login process runs; resolves once login either
    /// succeeds or is conclusively diagnosed as failed. The pull itself is
    /// fire-and-forget: its outcome is only visible on the console surface.
    pub async fn pull(
        &self,
        login_server: &str,
        request: &ImageRequest,
        username: &str,
        password: &Secret,
    ) -> Result<()> {
        // Used only to compose the remediation message below; never read here.
        let config_path = engine_config_path()?;

        let mut child = Command::new(&self.engine)
            .arg("login")
            .arg(login_server)
            .arg("--username")
            .arg(username)
            .arg("--password-stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| RegpullError::Spawn(err.to_string()))?;

        // The password travels only over the child's stdin; closing the pipe
        // signals end-of-input. The write is unconditional; a write failure
        // surfaces through the process outcome evaluated below.
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(password.expose().as_bytes()).await;
            let _ = stdin.shutdown().await;
        }

        let output = child.wait_with_output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        self.sink.append_line(&format!(
            "> {} login {} --username {} --password {}",
            self.engine, login_server, username, SECRET_MASK
        ));
        if !stdout.trim().is_empty() {
            self.sink.append_line(stdout.trim_end());
        }
        if !stderr.trim().is_empty() {
            self.sink.append_line(stderr.trim_end());
        }

        if !output.status.success() {
            self.sink.reveal();
            if CRED_STORE_DEFECT_PATTERNS
                .iter()
                .all(|pattern| stderr.contains(pattern))
            {
                return Err(RegpullError::CredentialStoreDefect(
                    credential_store_remediation(&config_path),
                ));
            }
            return Err(RegpullError::Login(format!(
                "{} login exited with {}: {}",
                self.engine,
                output.status,
                stderr.trim()
            )));
        }

        // A clean exit that still wrote diagnostics is treated as failure.
        if !stderr.trim().is_empty() {
            self.sink.reveal();
            return Err(RegpullError::Login(stderr.trim().to_string()));
        }

        self.console.show();
        self.console
            .submit(&format!("pull {}/{}", login_server, request))
            .await
    }
}

fn credential_store_remediation(config_path: &Path) -> String {
    format!(
        "The engine could not store the supplied credentials; this is a known \
         defect in the default credential-storage backend. To work around it, \
         edit {} and remove the \"credsStore\" setting, then retry. Note that \
         credentials will then be stored in plain text in that file, and all \
         currently authenticated registries will be logged out.",
        config_path.display()
    )
}
