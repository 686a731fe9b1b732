use crate::error::ThumbnailError;
use crate::storage::BlobStore;

/// Content type attached to every published thumbnail.
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";

/// Storage key for a product's thumbnail.
///
/// The key is deterministic in the product id, so republishing always
/// replaces the previous object instead of accumulating copies.
pub fn thumbnail_key(product_id: &str) -> String {
    format!("thumbnails/{}_thumbnail.jpg", product_id)
}

/// Write encoded thumbnail bytes to blob storage, publicly readable.
/// Returns the key the object was published under.
pub async fn publish_thumbnail(
    store: &dyn BlobStore,
    product_id: &str,
    bytes: Vec<u8>,
) -> Result<String, ThumbnailError> {
    let key = thumbnail_key(product_id);
    store
        .put_object(&key, bytes, THUMBNAIL_CONTENT_TYPE, true)
        .await?;
    Ok(key)
}
