use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::ObjectStorage;
use crate::shared::errors::StorageError;

const SCHEME: &str = "memory://";

/// Object storage that keeps bytes in a map; URLs look like `memory://<key>`.
#[derive(Default)]
pub struct InMemoryObjectStorage {
    objects: DashMap<String, (String, Vec<u8>)>,
}

impl InMemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.objects.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Content type and bytes stored under `url`.
    pub fn get(&self, url: &str) -> Option<(String, Vec<u8>)> {
        self.objects.get(url).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!("{}{}", SCHEME, key);
        self.objects
            .insert(url.clone(), (content_type.to_string(), bytes));
        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        self.objects
            .remove(url)
            .map(|_| ())
            .ok_or_else(|| StorageError::Object(format!("No object at {}", url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_delete() {
        let storage = InMemoryObjectStorage::new();
        let url = storage
            .upload("barber-shops/1/2.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();

        assert_eq!(url, "memory://barber-shops/1/2.png");
        assert_eq!(storage.get(&url), Some(("image/png".to_string(), vec![1, 2, 3])));

        storage.delete(&url).await.unwrap();
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn deleting_a_missing_object_is_an_object_error() {
        let storage = InMemoryObjectStorage::new();
        let err = storage.delete("memory://nope").await.unwrap_err();
        assert!(matches!(err, StorageError::Object(_)));
    }
}
