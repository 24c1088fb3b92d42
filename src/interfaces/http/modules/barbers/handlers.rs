//! Barber handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::dto::{BarberIdParams, BarberListParams, BarberRequest, BarberResponse, BarberShopRefParams};
use crate::application::BarberService;
use crate::config::PaginationConfig;
use crate::interfaces::http::common::{
    ApiError, ApiPath, ApiQuery, PageResponse, StandardError, ValidatedJson,
};

#[derive(Clone)]
pub struct BarberState {
    pub service: Arc<BarberService>,
    pub pagination: PaginationConfig,
}

#[utoipa::path(
    post,
    path = "/barber",
    tag = "Barbers",
    params(BarberShopRefParams),
    request_body = BarberRequest,
    responses(
        (status = 201, description = "Barber created", body = BarberResponse),
        (status = 400, description = "Validation error", body = StandardError),
        (status = 404, description = "Barber shop not found", body = StandardError)
    )
)]
pub async fn create_barber(
    State(state): State<BarberState>,
    ApiQuery(params): ApiQuery<BarberShopRefParams>,
    ValidatedJson(body): ValidatedJson<BarberRequest>,
) -> Result<(StatusCode, Json<BarberResponse>), ApiError> {
    let barber = state.service.save(body.into(), params.barber_shop_id).await?;
    Ok((StatusCode::CREATED, Json(barber.into())))
}

#[utoipa::path(
    put,
    path = "/barber",
    tag = "Barbers",
    params(BarberIdParams),
    request_body = BarberRequest,
    responses(
        (status = 202, description = "Barber updated"),
        (status = 400, description = "Validation error", body = StandardError),
        (status = 404, description = "Barber not found", body = StandardError)
    )
)]
pub async fn update_barber(
    State(state): State<BarberState>,
    ApiQuery(params): ApiQuery<BarberIdParams>,
    ValidatedJson(body): ValidatedJson<BarberRequest>,
) -> Result<StatusCode, ApiError> {
    state.service.update(params.barber_id, body.into()).await?;
    Ok(StatusCode::ACCEPTED)
}

#[utoipa::path(
    get,
    path = "/barber/{id}",
    tag = "Barbers",
    params(("id" = Uuid, Path, description = "Barber id")),
    responses(
        (status = 200, description = "Barber", body = BarberResponse),
        (status = 404, description = "Barber not found", body = StandardError)
    )
)]
pub async fn get_barber(
    State(state): State<BarberState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<BarberResponse>, ApiError> {
    let barber = state.service.find_by_id(id).await?;
    Ok(Json(barber.into()))
}

#[utoipa::path(
    get,
    path = "/barber",
    tag = "Barbers",
    params(BarberListParams),
    responses(
        (status = 200, description = "One page of the shop's barbers", body = PageResponse<BarberResponse>),
        (status = 404, description = "Barber shop not found", body = StandardError)
    )
)]
pub async fn list_barbers(
    State(state): State<BarberState>,
    ApiQuery(params): ApiQuery<BarberListParams>,
) -> Result<Json<PageResponse<BarberResponse>>, ApiError> {
    let page = params.page_params().resolve(&state.pagination);
    let barbers = state
        .service
        .list_all_by_barber_shop_id(params.barber_shop_id, page)
        .await?;
    Ok(Json(PageResponse::from_page(barbers)))
}
