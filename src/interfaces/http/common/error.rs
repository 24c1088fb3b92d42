//! Error envelope for every non-2xx response
//!
//! Handlers and extractors return [`ApiError`]. Its response carries the
//! rendered [`StandardError`] in the response extensions, and
//! [`error_envelope_middleware`] re-renders it with the request path filled in.

use std::collections::BTreeMap;

use axum::body::Body;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{DomainError, StorageError};

pub const VALIDATION_ERROR: &str = "Validation error";
pub const BAD_REQUEST: &str = "Bad request";
pub const NOT_FOUND: &str = "Not found";
pub const IMAGE_LIMIT_EXCEEDED: &str = "Image limit exceeded";
pub const UPLOAD_TOO_LARGE: &str = "Upload too large";
pub const STORAGE_ERROR: &str = "Storage error";
pub const STORAGE_CLIENT_ERROR: &str = "Storage client error";
pub const STORAGE_SERVICE_ERROR: &str = "Storage service error";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Either a plain description or a field → message map.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Fields(BTreeMap<String, String>),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandardError {
    pub status: u16,
    pub message: ErrorMessage,
    pub error: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub path: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: &'static str,
    message: ErrorMessage,
}

impl ApiError {
    pub fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            message: ErrorMessage::Text(message.into()),
        }
    }

    pub fn validation(fields: BTreeMap<String, String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: VALIDATION_ERROR,
            message: ErrorMessage::Fields(fields),
        }
    }

    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::validation(BTreeMap::from([(field.to_string(), message.into())]))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, BAD_REQUEST, message)
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND, format!("No route for {}", path))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &'static str {
        self.error
    }

    pub fn message(&self) -> &ErrorMessage {
        &self.message
    }
}

/// Central translation from domain failures to HTTP status and label.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let description = err.to_string();
        match err {
            DomainError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, NOT_FOUND, description),
            DomainError::ImageLimitExceeded { .. } => {
                Self::new(StatusCode::BAD_REQUEST, IMAGE_LIMIT_EXCEEDED, description)
            }
            DomainError::UploadTooLarge { .. } => {
                Self::new(StatusCode::BAD_REQUEST, UPLOAD_TOO_LARGE, description)
            }
            DomainError::Invalid { field, message } => Self::invalid_field(field, message),
            DomainError::Storage(StorageError::Object(message)) => {
                Self::new(StatusCode::BAD_REQUEST, STORAGE_ERROR, message)
            }
            DomainError::Storage(StorageError::Client(message)) => {
                Self::new(StatusCode::BAD_REQUEST, STORAGE_CLIENT_ERROR, message)
            }
            DomainError::Storage(StorageError::Service { status, message }) => {
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                Self::new(status, STORAGE_SERVICE_ERROR, message)
            }
            DomainError::Database(message) => {
                error!("Database error: {}", message);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR, description)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::new(StatusCode::BAD_REQUEST, UPLOAD_TOO_LARGE, err.body_text())
        } else {
            Self::bad_request(err.body_text())
        }
    }
}

impl StandardError {
    fn now(status: StatusCode, error: impl Into<String>, message: ErrorMessage) -> Self {
        Self {
            status: status.as_u16(),
            message,
            error: error.into(),
            timestamp: Utc::now().timestamp_millis(),
            path: String::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            warn!(status = %self.status, error = self.error, "Request failed");
        }
        let body = StandardError::now(self.status, self.error, self.message);
        let mut response = (self.status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

/// Fills in `path` on error envelopes, and wraps bare error responses
/// produced outside the handlers (405, 413, ...) in an envelope too.
pub async fn error_envelope_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let mut envelope = match response.extensions_mut().remove::<StandardError>() {
        Some(envelope) => envelope,
        None if is_json(&response) => return response,
        None => {
            let reason = status.canonical_reason().unwrap_or("Error");
            StandardError::now(status, reason, ErrorMessage::Text(reason.to_string()))
        }
    };
    envelope.path = path;

    let Ok(bytes) = serde_json::to_vec(&envelope) else {
        return response;
    };
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Response::from_parts(parts, Body::from(bytes))
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(DomainError::not_found("BarberShop", Uuid::new_v4()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.error(), NOT_FOUND);
    }

    #[test]
    fn image_rules_map_to_400_with_their_own_labels() {
        let limit = ApiError::from(DomainError::ImageLimitExceeded {
            barber_shop_id: Uuid::new_v4(),
            limit: 5,
        });
        assert_eq!(limit.status(), StatusCode::BAD_REQUEST);
        assert_eq!(limit.error(), IMAGE_LIMIT_EXCEEDED);

        let size = ApiError::from(DomainError::UploadTooLarge { size: 10, limit: 5 });
        assert_eq!(size.status(), StatusCode::BAD_REQUEST);
        assert_eq!(size.error(), UPLOAD_TOO_LARGE);
    }

    #[test]
    fn storage_errors_are_told_apart() {
        let object = ApiError::from(DomainError::Storage(StorageError::Object("gone".into())));
        assert_eq!(object.status(), StatusCode::BAD_REQUEST);
        assert_eq!(object.error(), STORAGE_ERROR);
        assert_eq!(object.message(), &ErrorMessage::Text("gone".into()));

        let client = ApiError::from(DomainError::Storage(StorageError::Client("dns".into())));
        assert_eq!(client.status(), StatusCode::BAD_REQUEST);
        assert_eq!(client.error(), STORAGE_CLIENT_ERROR);
    }

    #[test]
    fn storage_service_error_keeps_the_reported_status() {
        let err = ApiError::from(DomainError::Storage(StorageError::Service {
            status: 503,
            message: "SlowDown".into(),
        }));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error(), STORAGE_SERVICE_ERROR);

        let odd = ApiError::from(DomainError::Storage(StorageError::Service {
            status: 200,
            message: "?".into(),
        }));
        assert_eq!(odd.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn database_errors_are_internal() {
        let err = ApiError::from(DomainError::Database("disk I/O error".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error(), INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_field_becomes_a_field_map() {
        let err = ApiError::from(DomainError::Invalid {
            field: "file",
            message: "must not be empty".into(),
        });
        assert_eq!(err.error(), VALIDATION_ERROR);
        assert_eq!(
            err.message(),
            &ErrorMessage::Fields(BTreeMap::from([("file".into(), "must not be empty".into())]))
        );
    }

    #[test]
    fn messages_serialize_untagged() {
        let text = serde_json::to_value(ErrorMessage::Text("x".into())).unwrap();
        assert_eq!(text, serde_json::json!("x"));

        let fields = serde_json::to_value(ErrorMessage::Fields(BTreeMap::from([(
            "name".to_string(),
            "must not be blank".to_string(),
        )])))
        .unwrap();
        assert_eq!(fields, serde_json::json!({"name": "must not be blank"}));
    }
}
