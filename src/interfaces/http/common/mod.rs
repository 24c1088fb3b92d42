//! Shared HTTP building blocks: error envelope, extractors, validation, paging

pub mod error;
pub mod extract;
pub mod pagination;
pub mod validated_json;
pub mod validation;

pub use error::{error_envelope_middleware, ApiError, ErrorMessage, StandardError};
pub use extract::{ApiMultipart, ApiPath, ApiQuery};
pub use pagination::{PageParams, PageResponse};
pub use validated_json::ValidatedJson;
