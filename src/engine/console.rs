//! Output-sink and console collaborators
//!
//! The orchestrator writes diagnostics to a persistent output sink and
//! submits the pull to an interactive console surface. Both are trait
//! objects so alternate surfaces can be injected.

use crate::{RegpullError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

/// Append-only diagnostic text channel
pub trait OutputSink: Send + Sync {
    /// Append one line of text
    fn append_line(&self, line: &str);

    /// Bring the sink's content to the user's attention
    fn reveal(&self);
}

/// Output sink backed by the process's stderr stream
pub struct StderrSink;

impl OutputSink for StderrSink {
    fn append_line(&self, line: &str) {
        eprintln!("{}", line);
    }

    fn reveal(&self) {
        // stderr is already visible; just make sure nothing is buffered
        let _ = std::io::stderr().flush();
    }
}

/// Interactive console surface that accepts literal command text
#[async_trait]
pub trait Console: Send + Sync {
    /// Make the surface visible
    fn show(&self);

    /// Submit a command for execution without waiting for it to finish
    async fn submit(&self, command_text: &str) -> Result<()>;
}

/// Console surface that executes submitted commands through the engine binary
///
/// Submitted commands run detached with the caller's terminal attached;
/// resubmitting replaces the surface's current command.
pub struct ProcessConsole {
    engine: String,
    current: Mutex<Option<Child>>,
}

impl ProcessConsole {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            current: Mutex::new(None),
        }
    }

    /// Wait for the currently running command, if any, and return its exit code
    pub async fn wait_idle(&self) -> Result<Option<i32>> {
        let child = self.current.lock().await.take();
        match child {
            Some(mut child) => {
                let status = child.wait().await?;
                Ok(Some(status.code().unwrap_or(1)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl Console for ProcessConsole {
    fn show(&self) {
        // the controlling terminal is the surface; nothing to raise
    }

    async fn submit(&self, command_text: &str) -> Result<()> {
        let words = shell_words::split(command_text)
            .map_err(|err| RegpullError::Console(err.to_string()))?;
        if words.is_empty() {
            return Err(RegpullError::Console("empty command".to_string()));
        }

        let child = Command::new(&self.engine)
            .args(&words)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|err| RegpullError::Spawn(err.to_string()))?;

        *self.current.lock().await = Some(child);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_submit_runs_command_through_engine() {
        let console = ProcessConsole::new("true");
        console.submit("pull contoso.azurecr.io/webapp -a").await.unwrap();

        let code = console.wait_idle().await.unwrap();
        assert_eq!(code, Some(0));
    }

    #[tokio::test]
    async fn test_submit_rejects_unparsable_command() {
        let console = ProcessConsole::new("true");
        let err = console.submit("pull 'unterminated").await.unwrap_err();

        assert!(matches!(err, RegpullError::Console(_)));
    }

    #[tokio::test]
    async fn test_wait_idle_without_submission() {
        let console = ProcessConsole::new("true");

        assert_eq!(console.wait_idle().await.unwrap(), None);
    }
}
