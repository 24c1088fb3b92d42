//! Barber shop handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::dto::{BarberShopIdParams, BarberShopRequest, BarberShopResponse};
use crate::application::BarberShopService;
use crate::config::PaginationConfig;
use crate::interfaces::http::common::{
    ApiError, ApiPath, ApiQuery, PageParams, PageResponse, StandardError, ValidatedJson,
};

#[derive(Clone)]
pub struct BarberShopState {
    pub service: Arc<BarberShopService>,
    pub pagination: PaginationConfig,
}

#[utoipa::path(
    post,
    path = "/barberShop",
    tag = "Barber Shops",
    request_body = BarberShopRequest,
    responses(
        (status = 201, description = "Barber shop created", body = BarberShopResponse),
        (status = 400, description = "Validation error", body = StandardError)
    )
)]
pub async fn create_barber_shop(
    State(state): State<BarberShopState>,
    ValidatedJson(body): ValidatedJson<BarberShopRequest>,
) -> Result<(StatusCode, Json<BarberShopResponse>), ApiError> {
    let shop = state.service.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(shop.into())))
}

#[utoipa::path(
    put,
    path = "/barberShop",
    tag = "Barber Shops",
    params(BarberShopIdParams),
    request_body = BarberShopRequest,
    responses(
        (status = 202, description = "Barber shop updated"),
        (status = 400, description = "Validation error", body = StandardError),
        (status = 404, description = "Barber shop not found", body = StandardError)
    )
)]
pub async fn update_barber_shop(
    State(state): State<BarberShopState>,
    ApiQuery(params): ApiQuery<BarberShopIdParams>,
    ValidatedJson(body): ValidatedJson<BarberShopRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.update(params.barber_shop_id, body.into()).await?;
    Ok(StatusCode::ACCEPTED)
}

#[utoipa::path(
    get,
    path = "/barberShop/{id}",
    tag = "Barber Shops",
    params(("id" = Uuid, Path, description = "Barber shop id")),
    responses(
        (status = 200, description = "Barber shop", body = BarberShopResponse),
        (status = 404, description = "Barber shop not found", body = StandardError)
    )
)]
pub async fn get_barber_shop(
    State(state): State<BarberShopState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<BarberShopResponse>, ApiError> {
    let shop = state.service.find_by_id(id).await?;
    Ok(Json(shop.into()))
}

#[utoipa::path(
    get,
    path = "/barberShop",
    tag = "Barber Shops",
    params(PageParams),
    responses(
        (status = 200, description = "One page of barber shops", body = PageResponse<BarberShopResponse>)
    )
)]
pub async fn list_barber_shops(
    State(state): State<BarberShopState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<PageResponse<BarberShopResponse>>, ApiError> {
    let page = state.service.list_all(params.resolve(&state.pagination)).await?;
    Ok(Json(PageResponse::from_page(page)))
}
