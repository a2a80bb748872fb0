// ui5-nwabap-deployer/src/deploy/logic.rs
use super::DeploymentOutcome;
use crate::classify::{SourceFile, classify};
use crate::config::DeploymentConfig;
use crate::errors::{DeployError, Result};
use crate::sync::{FileStoreClient, ResolvedConfig, run_sync_flow};
use crate::transport::{TransportClient, acquire_transport};
use crate::utils::logger::Logger;
use crate::validate::validate;

/// Orchestrates one deployment.
///
/// 1. Validates and normalizes the options (fails before any remote call).
/// 2. Classifies the files as binary or text.
/// 3. Acquires the transport.
/// 4. Synchronizes the files with the resolved transport.
///
/// Every failure is reported to the logger before it is returned.
pub async fn perform_deployment_orchestration(
    config: &DeploymentConfig,
    files: Vec<SourceFile>,
    logger: &dyn Logger,
    transport_client: &dyn TransportClient,
    file_store: &dyn FileStoreClient,
) -> Result<DeploymentOutcome> {
    let outcome = orchestrate(config, files, logger, transport_client, file_store).await;
    if let Err(e) = &outcome {
        logger.error(&e.to_string());
    }
    outcome
}

async fn orchestrate(
    config: &DeploymentConfig,
    files: Vec<SourceFile>,
    logger: &dyn Logger,
    transport_client: &dyn TransportClient,
    file_store: &dyn FileStoreClient,
) -> Result<DeploymentOutcome> {
    let normalized = validate(config, logger)?;
    logger.log_verbose(&format!("Options: {}", normalized.to_log_string()));

    let files = classify(files);
    let binary_files = files.iter().filter(|f| f.is_binary()).count();
    logger.log_verbose(&format!(
        "Files: {}",
        files
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    ));

    let acquisition = acquire_transport(&normalized, transport_client, logger).await;
    let strategy = acquisition.strategy;
    logger.log_verbose(&format!("Transport: {}", strategy));
    let transport = acquisition
        .decision
        .into_result()
        .map_err(DeployError::from)?;

    let resolved = ResolvedConfig::new(normalized, transport.clone());
    run_sync_flow(resolved, &files, file_store, logger).await?;

    Ok(DeploymentOutcome {
        strategy,
        transport,
        files: files.len(),
        binary_files,
    })
}
