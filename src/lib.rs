//! Deploys UI5 build artifacts into a BSP container of a SAP NetWeaver ABAP
//! system, resolving the change transport the upload is recorded in.
//!
//! The remote services are injected through [`TransportClient`] and
//! [`FileStoreClient`]; [`deploy`] runs validation, classification, transport
//! acquisition and a single file synchronization.

pub mod classify;
pub mod config;
pub mod deploy;
pub mod errors;
pub mod sync;
pub mod transport;
pub mod utils;
pub mod validate;

#[cfg(test)]
mod testing;

pub use classify::{FileRecord, SourceFile};
pub use config::{DeploymentConfig, NormalizedConfig};
pub use deploy::{DeploymentOutcome, deploy};
pub use errors::{DeployError, Result};
pub use sync::{FileStoreClient, ResolvedConfig};
pub use transport::{TransportClient, TransportId, TransportStrategy};
pub use utils::{Logger, TracingLogger};
