//! Object Store Blob Repository
//!
//! BlobRepositoryの object_store 実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use object_store::path::Path;
use object_store::ObjectStore;
use std::sync::Arc;

use crate::domain::repositories::blob_repository::BlobRepository;

/// object_store 上のコンテナ（Azure / ローカルディレクトリ / メモリ）
pub struct ObjectStoreBlobRepository {
    store: Arc<dyn ObjectStore>,
}

impl ObjectStoreBlobRepository {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BlobRepository for ObjectStoreBlobRepository {
    async fn download(&self, blob_name: &str) -> Result<Vec<u8>> {
        let location = Path::from(blob_name);
        let bytes = self
            .store
            .get(&location)
            .await
            .with_context(|| format!("Failed to download blob {}", blob_name))?
            .bytes()
            .await
            .with_context(|| format!("Failed to read blob {}", blob_name))?;

        Ok(bytes.to_vec())
    }
}
