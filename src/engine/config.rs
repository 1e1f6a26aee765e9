//! Engine configuration inspection

use crate::telemetry::{Telemetry, TelemetryEvent};
use crate::{RegpullError, Result};
use std::path::{Path, PathBuf};

/// Result of the best-effort login-state probe
#[derive(Debug, Clone)]
pub struct LoginProbe {
    pub config_path: PathBuf,
    pub logged_in: bool,
}

/// Expected on-disk location of the engine's configuration file
pub fn engine_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        RegpullError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine user home directory. Please ensure HOME environment variable is set.",
        ))
    })?;

    Ok(home.join(".docker").join("config.json"))
}

/// Probe whether `login_server` appears in the engine's persisted configuration.
///
/// This is a raw substring heuristic, not a structured parse: it can
/// false-positive when the host name appears in an unrelated field and
/// false-negative when the file is laid out differently than expected.
/// A read failure is reported to telemetry and degrades to `logged_in = false`.
pub fn probe_login(login_server: &str, telemetry: &dyn Telemetry) -> Result<LoginProbe> {
    let config_path = engine_config_path()?;
    Ok(probe_login_at(&config_path, login_server, telemetry))
}

/// Probe a specific configuration file; see [`probe_login`]
pub fn probe_login_at(
    config_path: &Path,
    login_server: &str,
    telemetry: &dyn Telemetry,
) -> LoginProbe {
    let logged_in = match std::fs::read(config_path) {
        Ok(content) => contains_subslice(&content, login_server.as_bytes()),
        Err(err) => {
            telemetry.track(TelemetryEvent::suppressed(
                "engineConfigProbe",
                err.to_string(),
            ));
            false
        }
    };

    LoginProbe {
        config_path: config_path.to_path_buf(),
        logged_in,
    }
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}
