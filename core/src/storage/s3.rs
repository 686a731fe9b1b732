use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use crate::error::ThumbnailError;
use crate::storage::BlobStore;

/// S3 deployment configuration.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Bucket receiving thumbnail objects
    pub bucket: String,
    /// AWS region
    pub region: String,
}

impl S3Config {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `S3_BUCKET` is unset; the region falls back to
    /// `us-east-1`.
    pub fn from_env() -> Option<Self> {
        let bucket = std::env::var("S3_BUCKET").ok()?;
        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        Some(Self { bucket, region })
    }
}

/// Blob store backed by an S3 bucket.
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Build a client from the ambient AWS environment and the given config.
    ///
    /// Constructed once at process start and shared by reference.
    pub async fn from_config(config: &S3Config) -> Self {
        let aws_config = aws_config::from_env()
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(Client::new(&aws_config), config.bucket.clone())
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        public: bool,
    ) -> Result<(), ThumbnailError> {
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes));

        if public {
            request = request.acl(ObjectCannedAcl::PublicRead);
        }

        request
            .send()
            .await
            .map_err(|e| ThumbnailError::Publish {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}
