// ui5-nwabap-deployer/src/sync/logic.rs
use std::ops::Deref;

use super::FileStoreClient;
use crate::classify::FileRecord;
use crate::config::NormalizedConfig;
use crate::errors::SyncError;
use crate::transport::TransportId;
use crate::utils::logger::Logger;

/// Normalized configuration with the acquired transport merged in.
///
/// Only built by the crate once transport acquisition has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    config: NormalizedConfig,
}

impl ResolvedConfig {
    pub(crate) fn new(mut config: NormalizedConfig, transport: Option<TransportId>) -> Self {
        config.ui5.transport_no = transport;
        ResolvedConfig { config }
    }

    pub fn transport(&self) -> Option<&TransportId> {
        self.config.ui5.transport_no.as_ref()
    }
}

impl Deref for ResolvedConfig {
    type Target = NormalizedConfig;

    fn deref(&self) -> &NormalizedConfig {
        &self.config
    }
}

/// Hands the files to the file store, exactly once.
///
/// Takes the resolved configuration by value so a resolution can only ever
/// back a single synchronization. Collaborator errors are wrapped unchanged.
pub async fn run_sync_flow(
    resolved: ResolvedConfig,
    files: &[FileRecord],
    file_store: &dyn FileStoreClient,
    logger: &dyn Logger,
) -> Result<(), SyncError> {
    logger.log_verbose(&format!(
        "Synchronizing {} file(s) into BSP container {} (transport: {}).",
        files.len(),
        resolved.ui5.bsp_container,
        resolved
            .transport()
            .map(TransportId::as_str)
            .unwrap_or("none")
    ));

    file_store
        .sync_files(&resolved, files)
        .await
        .map_err(SyncError)?;

    logger.info(&format!(
        "Synchronized {} file(s) into BSP container {}.",
        files.len(),
        resolved.ui5.bsp_container
    ));
    Ok(())
}
