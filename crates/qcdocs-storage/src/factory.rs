//! Builds the configured object store provider.

use std::sync::Arc;

use qcdocs_core::config::storage::StorageConfig;
use qcdocs_core::error::AppError;
use qcdocs_core::result::AppResult;
use qcdocs_core::traits::store::ObjectStore;

use crate::providers::memory::MemoryObjectStore;
use crate::providers::s3::S3ObjectStore;

/// Instantiate the provider named by `storage.provider`.
pub async fn build_store(config: &StorageConfig) -> AppResult<Arc<dyn ObjectStore>> {
    match config.provider.as_str() {
        "s3" => Ok(Arc::new(S3ObjectStore::new(&config.s3).await?)),
        "memory" => Ok(Arc::new(MemoryObjectStore::new())),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider '{other}'"
        ))),
    }
}
