//! Application configuration
//!
//! Loaded from a TOML file. Every section and every field has a default, so a
//! missing file or a partial one is fine.
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [storage]
//! backend = "s3"
//! s3_bucket = "barbershop-images"
//! s3_region = "sa-east-1"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ImagePolicy;
use crate::infrastructure::DatabaseConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BARBERSHOP_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub images: ImagesConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds in-flight requests get to finish after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            url: defaults.url,
            max_connections: defaults.max_connections,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(section: &DatabaseSection) -> Self {
        DatabaseConfig {
            url: section.url.clone(),
            max_connections: section.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Local,
    S3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory the local backend writes to and the server exposes at `/uploads`
    pub local_dir: PathBuf,
    /// URL prefix of stored objects. For S3 this defaults to the bucket endpoint.
    pub public_base_url: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_region: String,
    pub s3_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Local,
            local_dir: PathBuf::from("./uploads"),
            public_base_url: None,
            s3_bucket: None,
            s3_region: "us-east-1".to_string(),
            s3_prefix: String::new(),
        }
    }
}

impl StorageConfig {
    /// Public URL prefix for the local backend.
    pub fn local_base_url(&self, server: &ServerConfig) -> String {
        self.public_base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}/uploads", server.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub max_per_shop: u64,
    pub max_upload_bytes: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        let policy = ImagePolicy::default();
        Self {
            max_per_shop: policy.max_per_shop,
            max_upload_bytes: policy.max_upload_bytes,
        }
    }
}

impl From<&ImagesConfig> for ImagePolicy {
    fn from(images: &ImagesConfig) -> Self {
        ImagePolicy {
            max_per_shop: images.max_per_shop,
            max_upload_bytes: images.max_upload_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        if self.pagination.default_page_size == 0 || self.pagination.max_page_size == 0 {
            return Err(ConfigError::Invalid("page sizes must be positive".into()));
        }
        if self.pagination.default_page_size > self.pagination.max_page_size {
            return Err(ConfigError::Invalid(
                "pagination.default_page_size exceeds pagination.max_page_size".into(),
            ));
        }
        if self.images.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid("images.max_upload_bytes must be positive".into()));
        }
        if self.storage.backend == StorageBackend::S3 && self.storage.s3_bucket.is_none() {
            return Err(ConfigError::Invalid(
                "storage.s3_bucket is required with the s3 backend".into(),
            ));
        }
        Ok(())
    }
}

/// Config file location: `$BARBERSHOP_CONFIG`, else
/// `~/.config/barbershop/config.toml`, else `./config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .map(|dir| dir.join("barbershop").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}
