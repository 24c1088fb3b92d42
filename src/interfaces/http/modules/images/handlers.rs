//! Barber shop image handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use tracing::debug;
use uuid::Uuid;

use super::dto::ImageResponse;
use crate::application::ImageService;
use crate::domain::ImageUpload;
use crate::interfaces::http::common::{ApiError, ApiMultipart, ApiPath, StandardError};
use crate::interfaces::http::common::validation::MUST_NOT_BE_NULL;

/// Multipart field holding the picture
pub const FILE_FIELD: &str = "file";

#[derive(Clone)]
pub struct ImageState {
    pub service: Arc<ImageService>,
}

#[utoipa::path(
    post,
    path = "/barberShop/{id}/images",
    tag = "Images",
    params(("id" = Uuid, Path, description = "Barber shop id")),
    request_body(content = super::dto::ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = ImageResponse),
        (status = 400, description = "Limit reached, file too large or storage failure", body = StandardError),
        (status = 404, description = "Barber shop not found", body = StandardError)
    )
)]
pub async fn upload_image(
    State(state): State<ImageState>,
    ApiPath(barber_shop_id): ApiPath<Uuid>,
    ApiMultipart(mut multipart): ApiMultipart,
) -> Result<(StatusCode, Json<ImageResponse>), ApiError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;
        upload = Some(ImageUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let upload = upload.ok_or_else(|| ApiError::invalid_field(FILE_FIELD, MUST_NOT_BE_NULL))?;
    let image = state.service.upload(barber_shop_id, upload).await?;
    Ok((StatusCode::CREATED, Json(image.into())))
}

#[utoipa::path(
    get,
    path = "/barberShop/{id}/images",
    tag = "Images",
    params(("id" = Uuid, Path, description = "Barber shop id")),
    responses(
        (status = 200, description = "Images of the shop, oldest first", body = Vec<ImageResponse>),
        (status = 404, description = "Barber shop not found", body = StandardError)
    )
)]
pub async fn list_images(
    State(state): State<ImageState>,
    ApiPath(barber_shop_id): ApiPath<Uuid>,
) -> Result<Json<Vec<ImageResponse>>, ApiError> {
    let images = state.service.list_by_barber_shop_id(barber_shop_id).await?;
    Ok(Json(images.into_iter().map(ImageResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/barberShop/{id}/images/{image_id}",
    tag = "Images",
    params(
        ("id" = Uuid, Path, description = "Barber shop id"),
        ("image_id" = Uuid, Path, description = "Image id")
    ),
    responses(
        (status = 204, description = "Image removed"),
        (status = 404, description = "Shop or image not found", body = StandardError)
    )
)]
pub async fn delete_image(
    State(state): State<ImageState>,
    ApiPath((barber_shop_id, image_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(barber_shop_id, image_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
