use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ThumbnailError;
use crate::storage::BlobStore;

/// A stored object with the metadata attached on publish.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub public: bool,
}

/// In-memory blob store for tests and local runs without S3.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        public: bool,
    ) -> Result<(), ThumbnailError> {
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
                public,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let store = MemoryBlobStore::new();

        store
            .put_object("thumbnails/x.jpg", vec![1, 1, 1], "image/jpeg", true)
            .await
            .unwrap();
        store
            .put_object("thumbnails/x.jpg", vec![2, 2], "image/jpeg", true)
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("thumbnails/x.jpg").unwrap().bytes, vec![2, 2]);
    }

    #[tokio::test]
    async fn test_metadata_retained() {
        let store = MemoryBlobStore::new();
        store
            .put_object("k", vec![0xFF], "image/jpeg", true)
            .await
            .unwrap();

        let object = store.get("k").unwrap();
        assert_eq!(object.content_type, "image/jpeg");
        assert!(object.public);
    }
}
