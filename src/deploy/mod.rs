// ui5-nwabap-deployer/src/deploy/mod.rs
pub(crate) mod logic;

use crate::classify::SourceFile;
use crate::config::DeploymentConfig;
use crate::errors::Result;
use crate::sync::FileStoreClient;
use crate::transport::{TransportClient, TransportId, TransportStrategy};
use crate::utils::logger::Logger;

/// Summary of a successful deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutcome {
    pub strategy: TransportStrategy,
    pub transport: Option<TransportId>,
    pub files: usize,
    pub binary_files: usize,
}

/// Public entry point for a deployment.
///
/// Validates the options, classifies the files, acquires a transport and
/// synchronizes the files exactly once. Resolves with the first failure.
pub async fn deploy(
    config: &DeploymentConfig,
    files: Vec<SourceFile>,
    logger: &dyn Logger,
    transport_client: &dyn TransportClient,
    file_store: &dyn FileStoreClient,
) -> Result<DeploymentOutcome> {
    logic::perform_deployment_orchestration(config, files, logger, transport_client, file_store)
        .await
}
