use thiserror::Error;

use crate::config::{LOCAL_PACKAGE, MAX_BSP_CONTAINER_LEN};

/// Failure reported by a remote collaborator (transport service or file store).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Remote system rejected the request: {0}")]
    Rejected(String),
}

/// A single failed configuration check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Authentication configuration not (fully) specified (check user name and password).")]
    MissingCredentials,

    #[error("UI5 configuration not (fully) specified (check package, BSP container, BSP container text information).")]
    IncompleteUi5Target,

    #[error("For packages <> \"{local}\" a transport number is necessary.", local = LOCAL_PACKAGE)]
    MissingTransportSource,

    #[error("Please specify a description to be used for the created transport.")]
    MissingTransportText,

    #[error(
        "BSP Container option must not be longer than {max} characters (exclusive customer specific namespace e.g. /YYY/): '{name}' has {length}.",
        max = MAX_BSP_CONTAINER_LEN
    )]
    BspContainerTooLong { name: String, length: usize },
}

/// Every violation found in one validation pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration erroneous ({} violation(s)).", .violations.len())]
pub struct ConfigurationError {
    pub violations: Vec<Violation>,
}

impl ConfigurationError {
    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }
}

#[derive(Error, Debug)]
pub enum TransportResolutionError {
    #[error("No transport configured, but create transport and user match option is disabled")]
    NoTransportConfigured,

    #[error("No transport found and create transport was disabled!")]
    NoTransportFound,

    #[error("Determining an existing transport failed: {0}")]
    TransportLookupFailed(#[source] ClientError),

    #[error("Creating a transport failed: {0}")]
    TransportCreationFailed(#[source] ClientError),
}

/// Failure of the single file synchronization call, carried unchanged.
#[derive(Error, Debug)]
#[error("Synchronizing files failed: {0}")]
pub struct SyncError(#[source] pub ClientError);

/// The one structured failure a deployment resolves with.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    TransportResolution(#[from] TransportResolutionError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

pub type Result<T> = std::result::Result<T, DeployError>;
