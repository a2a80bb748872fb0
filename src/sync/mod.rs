// ui5-nwabap-deployer/src/sync/mod.rs
pub(crate) mod logic;

use async_trait::async_trait;

use crate::classify::FileRecord;
use crate::errors::ClientError;

pub use logic::{ResolvedConfig, run_sync_flow};

/// Remote BSP repository that receives the deployable files.
///
/// Implementations choose the transfer encoding from [`FileRecord::is_binary`]
/// and own any retry policy.
#[async_trait]
pub trait FileStoreClient: Send + Sync {
    async fn sync_files(
        &self,
        config: &ResolvedConfig,
        files: &[FileRecord],
    ) -> Result<(), ClientError>;
}
