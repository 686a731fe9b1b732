use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

use product_catalog_core::product::Product;

#[derive(Debug, Error)]
#[error("record store error: {0}")]
pub struct StoreError(pub String);

/// Key-value record store for catalog products.
///
/// Whole records only: a product is written once and removed whole, there is
/// no partial update path. This trait is the seam where a hosted key-value
/// store plugs in; the wire protocol is not this service's concern.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn put(&self, product: Product) -> Result<(), StoreError>;
    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError>;
    /// Full scan. The catalog has no query or filter surface.
    async fn scan(&self) -> Result<Vec<Product>, StoreError>;
    /// Remove a record. Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// In-memory product store.
#[derive(Default)]
pub struct MemoryProductStore {
    records: RwLock<HashMap<String, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn put(&self, product: Product) -> Result<(), StoreError> {
        self.records
            .write()
            .unwrap()
            .insert(product.id.clone(), product);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.records.read().unwrap().get(id).cloned())
    }

    async fn scan(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.records.read().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.records.write().unwrap().remove(id);
        Ok(())
    }
}
