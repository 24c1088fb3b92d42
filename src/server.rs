//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database init, migrations,
//! object storage, REST API, metrics and graceful shutdown. The CLI binary
//! is a thin wrapper around it.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::ServiceRegistry;
use crate::config::{AppConfig, ConfigError, StorageBackend};
use crate::domain::{ImagePolicy, ObjectStorage, RepositoryProvider};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, DatabaseConfig, LocalObjectStorage, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_api_router, RouterOptions};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// ```rust,no_run
/// use barbershop::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// Application services behind the REST API.
    pub services: ServiceRegistry,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is bound to. The port differs from the
    /// configured one when that was 0.
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the service with the given options.
    ///
    /// This will:
    /// 1. Install the Prometheus metrics recorder
    /// 2. Connect to the database and run migrations
    /// 3. Set up object storage for images
    /// 4. Start the REST API server (with Swagger UI)
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting barber shop service...");

        let prometheus_handle = prometheus_handle()?;
        info!("📊 Prometheus metrics recorder ready");

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig::from(&app_cfg.database);
        info!("Database: {}", db_config.url);
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        // ── Repositories, storage & services ───────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let (storage, uploads_dir) = build_object_storage(&app_cfg).await?;
        let policy = ImagePolicy::from(&app_cfg.images);
        let services = ServiceRegistry::new(repos.clone(), storage, policy);

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(
            services.clone(),
            repos.clone(),
            prometheus_handle,
            RouterOptions {
                pagination: app_cfg.pagination,
                max_upload_bytes: policy.max_upload_bytes,
                uploads_dir,
            },
        );

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Server started.");

        Ok(Self {
            repos,
            services,
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop after shutdown has been triggered.
    ///
    /// In-flight requests get the configured shutdown timeout to finish;
    /// after that the server task is aborted.
    pub async fn wait(self) {
        info!("⏳ Waiting for server tasks to complete...");

        let mut api_task = self.api_task;
        match tokio::time::timeout(self.shutdown.timeout(), &mut api_task).await {
            Ok(Ok(())) => info!("REST API server stopped"),
            Ok(Err(e)) => error!("REST API server task panicked: {}", e),
            Err(_) => {
                warn!(
                    "REST API server did not stop within {:?}, aborting",
                    self.shutdown.timeout()
                );
                api_task.abort();
            }
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// The global metrics recorder can only be installed once per process, so a
/// restart within the same process reuses the first handle.
fn prometheus_handle() -> Result<PrometheusHandle, BuildError> {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");
    Ok(HANDLE.get_or_init(|| handle).clone())
}

/// Object storage for the configured backend, plus the directory the router
/// should serve at `/uploads` when files are kept locally.
async fn build_object_storage(
    config: &AppConfig,
) -> Result<(Arc<dyn ObjectStorage>, Option<PathBuf>), Box<dyn std::error::Error>> {
    match config.storage.backend {
        StorageBackend::Local => {
            let dir = config.storage.local_dir.clone();
            tokio::fs::create_dir_all(&dir).await?;
            let base_url = config.storage.local_base_url(&config.server);
            info!("Image storage: local directory {} ({})", dir.display(), base_url);
            let storage = LocalObjectStorage::new(dir.clone(), base_url);
            Ok((Arc::new(storage), Some(dir)))
        }
        StorageBackend::S3 => s3_storage(config).await,
    }
}

#[cfg(feature = "s3")]
async fn s3_storage(
    config: &AppConfig,
) -> Result<(Arc<dyn ObjectStorage>, Option<PathBuf>), Box<dyn std::error::Error>> {
    use crate::infrastructure::object_storage::S3ObjectStorage;

    let bucket = config.storage.s3_bucket.clone().ok_or_else(|| {
        ConfigError::Invalid("storage.s3_bucket is required with the s3 backend".into())
    })?;
    info!("Image storage: S3 bucket {} ({})", bucket, config.storage.s3_region);
    let storage = S3ObjectStorage::from_env(
        bucket,
        config.storage.s3_region.clone(),
        config.storage.s3_prefix.clone(),
        config.storage.public_base_url.clone(),
    )
    .await;
    Ok((Arc::new(storage), None))
}

#[cfg(not(feature = "s3"))]
async fn s3_storage(
    _config: &AppConfig,
) -> Result<(Arc<dyn ObjectStorage>, Option<PathBuf>), Box<dyn std::error::Error>> {
    Err(Box::new(ConfigError::Invalid(
        "storage.backend = \"s3\" needs a build with the `s3` feature".into(),
    )))
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_config(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        config.database.url = format!("sqlite://{}?mode=rwc", dir.join("test.db").display());
        config.database.max_connections = 1;
        config.storage.local_dir = dir.join("uploads");
        config
    }

    async fn raw_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn starts_serves_and_shuts_down() {
        let dir = tempfile::tempdir().unwrap();
        let handle = ServerHandle::start(ServerOptions {
            config: test_config(dir.path()),
            auto_migrate: true,
        })
        .await
        .unwrap();

        assert!(handle.is_running());
        assert_ne!(handle.local_addr.port(), 0);
        assert!(dir.path().join("uploads").is_dir());

        let response = raw_get(handle.local_addr, "/health").await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");

        let response = raw_get(handle.local_addr, "/barberShop").await;
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.contains("\"total\":0"));

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn s3_backend_without_a_bucket_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.storage.backend = StorageBackend::S3;

        let result = ServerHandle::start(ServerOptions {
            config,
            auto_migrate: true,
        })
        .await;
        assert!(result.is_err());
    }
}
