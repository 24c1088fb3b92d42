//! Object storage port
//!
//! Image bytes live outside the database. The backend hands back a public URL
//! on upload and accepts that same URL for deletion.

use async_trait::async_trait;

use crate::shared::errors::StorageError;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key` and return the public URL of the object.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Remove the object previously returned by [`upload`](Self::upload).
    async fn delete(&self, url: &str) -> Result<(), StorageError>;
}
