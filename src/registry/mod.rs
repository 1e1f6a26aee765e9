//! Registry selection, credentials, and credential resolution

pub mod credentials;
pub mod operation;
pub mod resolver;
pub mod selection;

pub use credentials::{
    CredentialProvider, Credentials, EnvCredentialProvider, Secret, StaticCredentialProvider,
};
pub use operation::{PullOperation, PullOutcome};
pub use resolver::CredentialResolver;
pub use selection::{ImageRequest, ImageSelection, RegistrySelection};
