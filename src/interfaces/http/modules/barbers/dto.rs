//! Barber DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::{Barber, BarberDraft};
use crate::interfaces::http::common::validation::not_blank;
use crate::interfaces::http::common::PageParams;

/// Body of `POST /barber` and `PUT /barber`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BarberRequest {
    #[schema(example = "José")]
    pub name: Option<String>,
}

impl Validate for BarberRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        not_blank(&mut errors, "name", self.name.as_deref());
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<BarberRequest> for BarberDraft {
    fn from(req: BarberRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberResponse {
    pub id: Uuid,
    pub name: String,
    pub barber_shop_id: Uuid,
}

impl From<Barber> for BarberResponse {
    fn from(b: Barber) -> Self {
        Self {
            id: b.id,
            name: b.name,
            barber_shop_id: b.barber_shop_id,
        }
    }
}

/// `?barberShopId=` of `POST /barber`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BarberShopRefParams {
    pub barber_shop_id: Uuid,
}

/// `?barberId=` of `PUT /barber`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BarberIdParams {
    pub barber_id: Uuid,
}

/// `?barberShopId=&page=&size=` of `GET /barber`
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BarberListParams {
    pub barber_shop_id: Uuid,
    /// Zero-based page index. Default: 0
    pub page: Option<u64>,
    /// Items per page. Default: 20, capped at 100
    pub size: Option<u64>,
}

impl BarberListParams {
    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            size: self.size,
        }
    }
}
