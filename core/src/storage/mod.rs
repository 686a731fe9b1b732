pub mod memory;
pub mod s3;

use async_trait::async_trait;

use crate::error::ThumbnailError;

/// Durable, publicly addressable blob storage.
///
/// A put overwrites any existing object at the same key: last writer wins.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        public: bool,
    ) -> Result<(), ThumbnailError>;
}
