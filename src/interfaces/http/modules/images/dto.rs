//! Image DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Image;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            url: image.url,
            created_at: image.created_at,
        }
    }
}

/// Multipart form of an image upload
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    /// Picture bytes
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
