//! Registry credentials and the credential-provider boundary

use async_trait::async_trait;
use std::fmt;

/// Fixed placeholder used wherever a secret would otherwise be printed
pub const SECRET_MASK: &str = "********";

/// A secret value that never appears in logs or debug output
///
/// The raw value is only reachable through [`Secret::expose`]; the sole
/// legitimate consumer is the login process's stdin pipe.
#[derive(Clone)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the raw value for streaming into a process input pipe
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SECRET_MASK)
    }
}

/// Credentials for one registry; fetched fresh per operation, never persisted
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Secret,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password),
        }
    }
}

/// External identity/token service capable of serving any authenticated user
///
/// Implementations live outside this crate's scope; the two adapters below
/// cover the binary (environment variables) and embedding/tests (fixed
/// credentials). Provider failures are surfaced unmodified by the resolver.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn get_login_credentials(&self, registry_identifier: &str) -> anyhow::Result<Credentials>;
}

/// Provider that reads credentials from environment variables
pub struct EnvCredentialProvider {
    username_var: String,
    password_var: String,
}

impl EnvCredentialProvider {
    pub fn new(username_var: impl Into<String>, password_var: impl Into<String>) -> Self {
        Self {
            username_var: username_var.into(),
            password_var: password_var.into(),
        }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new("REGPULL_USERNAME", "REGPULL_PASSWORD")
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_login_credentials(
        &self,
        _registry_identifier: &str,
    ) -> anyhow::Result<Credentials> {
        let username = std::env::var(&self.username_var)
            .map_err(|_| anyhow::anyhow!("{} is not set", self.username_var))?;
        let password = std::env::var(&self.password_var)
            .map_err(|_| anyhow::anyhow!("{} is not set", self.password_var))?;

        Ok(Credentials::new(username, password))
    }
}

/// Provider that returns fixed credentials
pub struct StaticCredentialProvider {
    credentials: Credentials,
}

impl StaticCredentialProvider {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn get_login_credentials(
        &self,
        _registry_identifier: &str,
    ) -> anyhow::Result<Credentials> {
        Ok(self.credentials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_debug_is_masked() {
        let secret = Secret::new("hunter2");

        assert_eq!(format!("{:?}", secret), SECRET_MASK);
    }

    #[test]
    fn test_credentials_debug_never_contains_password() {
        let credentials = Credentials::new("bob", "hunter2");
        let rendered = format!("{:?}", credentials);

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("bob"));
    }

    #[tokio::test]
    async fn test_env_provider_reads_configured_variables() {
        std::env::set_var("REGPULL_TEST_USER", "bob");
        std::env::set_var("REGPULL_TEST_PASS", "t0ken");

        let provider = EnvCredentialProvider::new("REGPULL_TEST_USER", "REGPULL_TEST_PASS");
        let credentials = provider.get_login_credentials("any").await.unwrap();

        assert_eq!(credentials.username, "bob");
        assert_eq!(credentials.password.expose(), "t0ken");
    }

    #[tokio::test]
    async fn test_env_provider_fails_when_unset() {
        let provider =
            EnvCredentialProvider::new("REGPULL_TEST_MISSING_U", "REGPULL_TEST_MISSING_P");

        assert!(provider.get_login_credentials("any").await.is_err());
    }
}
