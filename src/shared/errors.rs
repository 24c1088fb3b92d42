use thiserror::Error;
use uuid::Uuid;

/// Failure reported by an object storage backend.
///
/// The three categories are kept apart so the HTTP boundary can map them to
/// different status codes.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The object itself could not be read, written or located.
    #[error("{0}")]
    Object(String),

    /// The request never reached the storage service (network, credentials, ...).
    #[error("{0}")]
    Client(String),

    /// The storage service answered with an error.
    #[error("{message}")]
    Service { status: u16, message: String },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found: {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Barber shop {barber_shop_id} already holds the maximum of {limit} images")]
    ImageLimitExceeded { barber_shop_id: Uuid, limit: u64 },

    #[error("Upload of {size} bytes exceeds the limit of {limit} bytes")]
    UploadTooLarge { size: usize, limit: usize },

    #[error("Invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity_and_id() {
        let id = Uuid::new_v4();
        let err = DomainError::not_found("BarberShop", id);
        assert_eq!(err.to_string(), format!("BarberShop not found: id={}", id));
    }

    #[test]
    fn storage_errors_pass_their_message_through() {
        let err: DomainError = StorageError::Service {
            status: 503,
            message: "SlowDown".into(),
        }
        .into();
        assert_eq!(err.to_string(), "SlowDown");
    }

    #[test]
    fn database_errors_convert_from_sea_orm() {
        let err = DomainError::from(sea_orm::DbErr::Custom("disk full".into()));
        assert!(matches!(err, DomainError::Database(ref m) if m.contains("disk full")));
    }
}
