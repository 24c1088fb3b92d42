use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{join_url, key_from_url};
use crate::domain::ObjectStorage;
use crate::shared::errors::StorageError;

/// Stores objects as files under a root directory.
///
/// The HTTP layer serves that directory, so the public URL of an object is
/// `public_base_url` joined with its key.
pub struct LocalObjectStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let clean = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if key.is_empty() || !clean {
            return Err(StorageError::Object(format!("Invalid object key: {}", key)));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Object(format!("{}: {}", parent.display(), e)))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::Object(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Stored object");
        Ok(join_url(&self.public_base_url, key))
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let key = key_from_url(&self.public_base_url, url).ok_or_else(|| {
            StorageError::Object(format!("{} is not served by local storage", url))
        })?;
        let path = self.path_for(key)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| StorageError::Object(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "Removed object");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/uploads";

    #[tokio::test]
    async fn upload_writes_the_file_and_returns_its_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), BASE);

        let url = storage
            .upload("barber-shops/s/i.png", b"png".to_vec(), "image/png")
            .await
            .unwrap();

        assert_eq!(url, format!("{}/barber-shops/s/i.png", BASE));
        let written = std::fs::read(dir.path().join("barber-shops/s/i.png")).unwrap();
        assert_eq!(written, b"png");
    }

    #[tokio::test]
    async fn delete_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), BASE);
        let url = storage.upload("a/b.jpg", vec![1], "image/jpeg").await.unwrap();

        storage.delete(&url).await.unwrap();

        assert!(!dir.path().join("a/b.jpg").exists());
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), BASE);

        let err = storage.upload("../x", vec![1], "image/png").await.unwrap_err();
        assert!(matches!(err, StorageError::Object(_)));
    }

    #[tokio::test]
    async fn deleting_a_foreign_url_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalObjectStorage::new(dir.path(), BASE);

        let err = storage.delete("https://elsewhere/x.png").await.unwrap_err();
        assert!(matches!(err, StorageError::Object(_)));
    }
}
