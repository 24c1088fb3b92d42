//! Barber shop DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::{Address, AddressDraft, BarberShop, BarberShopDraft};
use crate::interfaces::http::common::validation::{not_blank, not_null, url};
use crate::interfaces::http::modules::images::ImageResponse;

/// Address of a shop as sent by clients
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[schema(example = "São Paulo")]
    pub city: Option<String>,
    #[schema(example = "Consolação")]
    pub district: Option<String>,
    #[schema(example = "Rua Augusta")]
    pub street: Option<String>,
    /// House number; a JSON number is accepted and kept as text
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(example = "42")]
    pub number: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Decimal(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Integer(n) => n.to_string(),
        Raw::Decimal(n) => n.to_string(),
    }))
}

/// Body of `POST /barberShop` and `PUT /barberShop`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberShopRequest {
    #[schema(example = "Navalha de Ouro")]
    pub name: Option<String>,
    #[schema(example = "https://www.google.com")]
    pub image_url: Option<String>,
    pub address: Option<AddressRequest>,
}

impl Validate for BarberShopRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        not_blank(&mut errors, "name", self.name.as_deref());
        not_blank(&mut errors, "imageUrl", self.image_url.as_deref());
        url(&mut errors, "imageUrl", self.image_url.as_deref());
        if not_null(&mut errors, "address", self.address.as_ref()) {
            if let Some(address) = &self.address {
                not_blank(&mut errors, "address.city", address.city.as_deref());
                not_blank(&mut errors, "address.district", address.district.as_deref());
                not_blank(&mut errors, "address.street", address.street.as_deref());
                not_blank(&mut errors, "address.number", address.number.as_deref());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<AddressRequest> for AddressDraft {
    fn from(req: AddressRequest) -> Self {
        Self {
            street: req.street.unwrap_or_default(),
            district: req.district.unwrap_or_default(),
            city: req.city.unwrap_or_default(),
            number: req.number.unwrap_or_default(),
        }
    }
}

impl From<BarberShopRequest> for BarberShopDraft {
    fn from(req: BarberShopRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            image_url: req.image_url.unwrap_or_default(),
            address: req.address.map(AddressDraft::from).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: Uuid,
    pub street: String,
    pub district: String,
    pub city: String,
    pub number: String,
}

impl From<Address> for AddressResponse {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            street: a.street,
            district: a.district,
            city: a.city,
            number: a.number,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberShopResponse {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub address: AddressResponse,
    pub images: Vec<ImageResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<BarberShop> for BarberShopResponse {
    fn from(shop: BarberShop) -> Self {
        Self {
            id: shop.id,
            name: shop.name,
            image_url: shop.image_url,
            address: shop.address.into(),
            images: shop.images.into_iter().map(ImageResponse::from).collect(),
            created_at: shop.created_at,
        }
    }
}

/// `?barberShopId=` of `PUT /barberShop`
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct BarberShopIdParams {
    pub barber_shop_id: Uuid,
}
