//! Registry and image selection model

use std::fmt;

/// A chosen remote registry
#[derive(Debug, Clone)]
pub struct RegistrySelection {
    /// Opaque identifier understood by the credential provider
    pub identifier: String,
    /// Canonical host name used for login and pull
    pub login_server: String,
}

impl RegistrySelection {
    pub fn new(identifier: impl Into<String>, login_server: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            login_server: login_server.into(),
        }
    }

    /// Selection whose identifier is the login server itself
    pub fn from_login_server(login_server: impl Into<String>) -> Self {
        let login_server = login_server.into();
        Self {
            identifier: login_server.clone(),
            login_server,
        }
    }
}

/// What the user picked in the registry tree
///
/// The two node kinds are resolved exactly once, at this boundary, into the
/// uniform [`ImageRequest`]; downstream code never branches on selection kind.
#[derive(Debug, Clone)]
pub enum ImageSelection {
    /// A whole repository; pulls every tag it holds
    Repository { repository: String },
    /// A single tagged image, as provided by the picker (e.g. "webapp:v2")
    ImageTag { tag: String },
}

impl ImageSelection {
    /// Tag selection composed from a repository context, in repository-qualified form
    pub fn qualified(repository: &str, tag: &str) -> Self {
        ImageSelection::ImageTag {
            tag: format!("{}:{}", repository, tag),
        }
    }

    /// Resolve the selection into the request expression consumed by the
    /// engine's pull command. Pulling every tag and pulling one tag yield
    /// syntactically distinct expressions under the same command grammar.
    pub fn into_request(self) -> ImageRequest {
        match self {
            ImageSelection::Repository { repository } => ImageRequest(format!("{} -a", repository)),
            ImageSelection::ImageTag { tag } => ImageRequest(tag),
        }
    }
}

/// The request expression passed to the engine's pull command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest(String);

impl ImageRequest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_all_request() {
        let request = ImageSelection::Repository {
            repository: "webapp".to_string(),
        }
        .into_request();

        assert_eq!(request.as_str(), "webapp -a");
    }

    #[test]
    fn test_tag_request_is_verbatim() {
        let request = ImageSelection::ImageTag {
            tag: "v2".to_string(),
        }
        .into_request();

        assert_eq!(request.as_str(), "v2");
    }

    #[test]
    fn test_qualified_tag_request() {
        let request = ImageSelection::qualified("webapp", "v2").into_request();

        assert_eq!(request.as_str(), "webapp:v2");
    }

    #[test]
    fn test_all_tags_and_single_tag_are_distinct() {
        let all = ImageSelection::Repository {
            repository: "webapp".to_string(),
        }
        .into_request();
        let one = ImageSelection::ImageTag {
            tag: "webapp".to_string(),
        }
        .into_request();

        assert_ne!(all, one);
    }

    #[test]
    fn test_selection_from_login_server() {
        let selection = RegistrySelection::from_login_server("contoso.azurecr.io");

        assert_eq!(selection.identifier, "contoso.azurecr.io");
        assert_eq!(selection.login_server, "contoso.azurecr.io");
    }
}
