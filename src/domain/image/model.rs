//! Image domain entity

use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// A stored picture of a barber shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Uuid,
    pub barber_shop_id: Uuid,
    /// Public URL returned by the object storage
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// Raw file received from a client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Storage key for this upload: `barber-shops/<shop>/<image>[.ext]`.
    pub fn storage_key(&self, barber_shop_id: Uuid, image_id: Uuid) -> String {
        let extension = self
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();
        format!("barber-shops/{}/{}{}", barber_shop_id, image_id, extension)
    }
}

/// Limits applied to shop images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePolicy {
    pub max_per_shop: u64,
    pub max_upload_bytes: usize,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_per_shop: 5,
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ImagePolicy {
    /// Fails when one more image would exceed the per-shop maximum.
    pub fn check_capacity(&self, barber_shop_id: Uuid, current: u64) -> DomainResult<()> {
        if current >= self.max_per_shop {
            return Err(DomainError::ImageLimitExceeded {
                barber_shop_id,
                limit: self.max_per_shop,
            });
        }
        Ok(())
    }

    pub fn check_size(&self, upload: &ImageUpload) -> DomainResult<()> {
        if upload.bytes.is_empty() {
            return Err(DomainError::Invalid {
                field: "file",
                message: "must not be empty".into(),
            });
        }
        if upload.bytes.len() > self.max_upload_bytes {
            return Err(DomainError::UploadTooLarge {
                size: upload.bytes.len(),
                limit: self.max_upload_bytes,
            });
        }
        Ok(())
    }
}
