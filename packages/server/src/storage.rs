use std::sync::Arc;

use anyhow::Context;
use common::storage::BlobStore;
use common::storage::filesystem::FilesystemBlobStore;
use common::storage::s3::{S3BlobStore, S3Settings};

use crate::config::StorageConfig;

/// Build the configured blob store backend.
pub async fn from_config(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn BlobStore>> {
    match cfg.backend.as_str() {
        "filesystem" => {
            let store = FilesystemBlobStore::new(cfg.root_dir.clone().into(), cfg.public_base.clone())
                .await
                .context("Failed to initialize filesystem storage")?;
            Ok(Arc::new(store))
        }
        "s3" => {
            let store = S3BlobStore::new(&S3Settings {
                bucket: cfg.s3_bucket.clone(),
                region: cfg.s3_region.clone(),
                endpoint: cfg.s3_endpoint.clone(),
                access_key: cfg.s3_access_key.clone(),
                secret_key: cfg.s3_secret_key.clone(),
                public_base: cfg.public_base.clone(),
            })
            .context("Failed to initialize S3 storage")?;
            Ok(Arc::new(store))
        }
        other => anyhow::bail!("Unknown storage.backend '{other}' (expected 'filesystem' or 's3')"),
    }
}
