// ui5-nwabap-deployer/src/transport/mod.rs
pub(crate) mod decision;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::config::NormalizedConfig;
use crate::errors::ClientError;

pub use decision::{Acquisition, TransportDecision, TransportStrategy, acquire_transport, select_strategy};

/// Identifier of a change transport, as assigned by the remote system.
///
/// Treated as an opaque token: never parsed, only carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransportId(String);

impl TransportId {
    pub fn new(id: impl Into<String>) -> Self {
        TransportId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransportId {
    fn from(id: &str) -> Self {
        TransportId(id.to_string())
    }
}

impl From<String> for TransportId {
    fn from(id: String) -> Self {
        TransportId(id)
    }
}

impl fmt::Display for TransportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote change-management service.
///
/// The normalized configuration is handed over as connection context. How
/// `transport_use_locked` narrows the lookup is up to the implementation.
#[async_trait]
pub trait TransportClient: Send + Sync {
    /// Looks for an open transport owned by the authenticating user.
    async fn determine_existing_transport(
        &self,
        config: &NormalizedConfig,
    ) -> Result<Option<TransportId>, ClientError>;

    async fn create_transport(
        &self,
        config: &NormalizedConfig,
        package: &str,
        description: &str,
    ) -> Result<TransportId, ClientError>;
}
