//! Turns a registry selection into login credentials

use crate::registry::credentials::{CredentialProvider, Credentials};
use crate::registry::selection::RegistrySelection;
use crate::{RegpullError, Result};
use std::sync::Arc;

/// Resolves credentials for a selected registry by delegating to the
/// configured provider. Works uniformly whether or not any particular CLI
/// tool is authenticated locally; provider failures (expired session,
/// insufficient permission, network) are surfaced verbatim.
pub struct CredentialResolver {
    provider: Arc<dyn CredentialProvider>,
}

impl CredentialResolver {
    pub fn new(provider: Arc<dyn CredentialProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self, selection: &RegistrySelection) -> Result<Credentials> {
        let credentials = self
            .provider
            .get_login_credentials(&selection.identifier)
            .await
            .map_err(|err| RegpullError::AuthResolution(format!("{:#}", err)))?;

        // The password is streamed to a stdin pipe terminated by end-of-input;
        // an embedded line break would truncate it.
        if credentials.password.expose().contains(['\n', '\r']) {
            return Err(RegpullError::AuthResolution(
                "provider returned a password with an embedded line break".to_string(),
            ));
        }

        Ok(credentials)
    }
}
