use async_trait::async_trait;
use s3::Bucket;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::region::Region;

use super::error::StorageError;
use super::traits::{BlobStore, validate_key};

/// S3-compatible blob store for deployments that keep badge assets in an
/// external bucket instead of the local filesystem.
pub struct S3BlobStore {
    bucket: Box<Bucket>,
    public_base: String,
}

/// Connection settings for an S3-compatible bucket.
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for non-AWS providers (MinIO, R2, ...). Empty for AWS.
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    /// Base URL under which the bucket contents are publicly served.
    pub public_base: String,
}

impl S3BlobStore {
    pub fn new(settings: &S3Settings) -> Result<Self, StorageError> {
        let region = if settings.endpoint.is_empty() {
            settings
                .region
                .parse::<Region>()
                .map_err(|e| StorageError::Backend(e.to_string()))?
        } else {
            Region::Custom {
                region: settings.region.clone(),
                endpoint: settings.endpoint.clone(),
            }
        };

        let credentials = Credentials::new(
            Some(&settings.access_key),
            Some(&settings.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| StorageError::Backend(e.to_string()))?;

        let bucket = Bucket::new(&settings.bucket, region, credentials)
            .map_err(map_s3_error)?
            .with_path_style();

        Ok(Self {
            bucket,
            public_base: settings.public_base.trim_end_matches('/').to_string(),
        })
    }
}

fn map_s3_error(err: S3Error) -> StorageError {
    StorageError::Backend(err.to_string())
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> Result<String, StorageError> {
        validate_key(key)?;
        self.bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(map_s3_error)?;
        Ok(self.public_url(key))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        validate_key(key)?;
        match self.bucket.get_object(key).await {
            Ok(response) => Ok(response.bytes().to_vec()),
            Err(S3Error::HttpFailWithBody(404, _)) => Err(StorageError::NotFound(key.to_string())),
            Err(e) => Err(map_s3_error(e)),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        match self.bucket.head_object(key).await {
            Ok(_) => Ok(true),
            Err(S3Error::HttpFailWithBody(404, _)) => Ok(false),
            Err(e) => Err(map_s3_error(e)),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;
        if !self.exists(key).await? {
            return Ok(false);
        }
        self.bucket.delete_object(key).await.map_err(map_s3_error)?;
        Ok(true)
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }
}
