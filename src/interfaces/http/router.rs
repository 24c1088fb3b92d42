//! API Router with Swagger UI

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::Uri,
    middleware,
    routing::{delete, get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ServiceRegistry;
use crate::config::PaginationConfig;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{
    error_envelope_middleware, ApiError, ErrorMessage, PageResponse, StandardError,
};
use crate::interfaces::http::modules::barber_shops::{self, BarberShopState};
use crate::interfaces::http::modules::barbers::{self, BarberState};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::images::{self, ImageState};
use crate::interfaces::http::modules::metrics::{self, http_metrics_middleware, MetricsState};
use crate::interfaces::http::modules::request_id::request_id_middleware;

/// Room for multipart framing around the largest accepted file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Unified router state. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub services: ServiceRegistry,
    pub repos: Arc<dyn RepositoryProvider>,
    pub pagination: PaginationConfig,
    pub prometheus: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl FromRef<ApiState> for BarberShopState {
    fn from_ref(s: &ApiState) -> Self {
        BarberShopState {
            service: Arc::clone(&s.services.barber_shops),
            pagination: s.pagination,
        }
    }
}

impl FromRef<ApiState> for BarberState {
    fn from_ref(s: &ApiState) -> Self {
        BarberState {
            service: Arc::clone(&s.services.barbers),
            pagination: s.pagination,
        }
    }
}

impl FromRef<ApiState> for ImageState {
    fn from_ref(s: &ApiState) -> Self {
        ImageState {
            service: Arc::clone(&s.services.images),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            repos: Arc::clone(&s.repos),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<ApiState> for MetricsState {
    fn from_ref(s: &ApiState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        metrics::prometheus_metrics,
        // Barber shops
        barber_shops::create_barber_shop,
        barber_shops::update_barber_shop,
        barber_shops::get_barber_shop,
        barber_shops::list_barber_shops,
        // Images
        images::upload_image,
        images::list_images,
        images::delete_image,
        // Barbers
        barbers::create_barber,
        barbers::update_barber,
        barbers::get_barber,
        barbers::list_barbers,
    ),
    components(
        schemas(
            StandardError,
            ErrorMessage,
            barber_shops::BarberShopRequest,
            barber_shops::AddressRequest,
            barber_shops::BarberShopResponse,
            barber_shops::AddressResponse,
            PageResponse<barber_shops::BarberShopResponse>,
            images::ImageResponse,
            barbers::BarberRequest,
            barbers::BarberResponse,
            PageResponse<barbers::BarberResponse>,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Liveness, database reachability and Prometheus metrics"),
        (name = "Barber Shops", description = "Barber shop registration, update and lookup"),
        (name = "Images", description = "Pictures of a barber shop kept in object storage"),
        (name = "Barbers", description = "Barbers working at a barber shop"),
    ),
    info(
        title = "Barber Shop Booking API",
        version = "0.1.0",
        description = "REST API for barber shops, their barbers, addresses and images",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Settings the router needs beyond the services.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    pub pagination: PaginationConfig,
    /// Largest accepted image in bytes
    pub max_upload_bytes: usize,
    /// Directory served at `/uploads` (local object storage only)
    pub uploads_dir: Option<PathBuf>,
}

/// Create the API router with all routes
pub fn create_api_router(
    services: ServiceRegistry,
    repos: Arc<dyn RepositoryProvider>,
    prometheus: PrometheusHandle,
    options: RouterOptions,
) -> Router {
    let state = ApiState {
        services,
        repos,
        pagination: options.pagination,
        prometheus,
        started_at: Arc::new(Instant::now()),
    };

    let body_limit = options.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD);

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics))
        .route(
            "/barberShop",
            get(barber_shops::list_barber_shops)
                .post(barber_shops::create_barber_shop)
                .put(barber_shops::update_barber_shop),
        )
        .route("/barberShop/{id}", get(barber_shops::get_barber_shop))
        .route(
            "/barberShop/{id}/images",
            post(images::upload_image)
                .layer(DefaultBodyLimit::max(body_limit))
                .get(images::list_images),
        )
        .route(
            "/barberShop/{id}/images/{image_id}",
            delete(images::delete_image),
        )
        .route(
            "/barber",
            get(barbers::list_barbers)
                .post(barbers::create_barber)
                .put(barbers::update_barber),
        )
        .route("/barber/{id}", get(barbers::get_barber))
        .with_state(state);

    let mut router = Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = options.uploads_dir {
        router = router.nest_service("/uploads", ServeDir::new(dir));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(route_not_found)
        .layer(middleware::from_fn(error_envelope_middleware))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(request_id_middleware))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::Service;
    use uuid::Uuid;

    use crate::domain::ImagePolicy;
    use crate::infrastructure::{InMemoryObjectStorage, InMemoryRepositoryProvider};

    const BOUNDARY: &str = "barbershop-test-boundary";

    fn app_with_policy(policy: ImagePolicy) -> Router {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(InMemoryRepositoryProvider::new());
        let storage = Arc::new(InMemoryObjectStorage::new());
        let services = ServiceRegistry::new(repos.clone(), storage, policy);
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(
            services,
            repos,
            handle,
            RouterOptions {
                pagination: PaginationConfig::default(),
                max_upload_bytes: policy.max_upload_bytes,
                uploads_dir: None,
            },
        )
    }

    fn app() -> Router {
        app_with_policy(ImagePolicy::default())
    }

    async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
        let mut svc = app.clone().into_service();
        svc.call(req).await.unwrap()
    }

    async fn json_body(resp: Response<Body>) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn shop_body(name: &str) -> Value {
        json!({
            "name": name,
            "imageUrl": "https://www.google.com",
            "address": {"city": "Test", "district": "Test", "street": "Test", "number": "42"}
        })
    }

    fn upload_request(shop_id: &str, bytes: &[u8]) -> Request<Body> {
        multipart_request(shop_id, "file", bytes)
    }

    fn multipart_request(shop_id: &str, field: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"front.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(format!("/barberShop/{}/images", shop_id))
            .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))
            .unwrap()
    }

    async fn create_shop(app: &Router, name: &str) -> Value {
        let resp = send(app, json_request("POST", "/barberShop", shop_body(name))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        json_body(resp).await
    }

    #[tokio::test]
    async fn create_barber_shop_returns_201_with_the_shop() {
        let app = app();
        let shop = create_shop(&app, "Test").await;

        assert!(shop["id"].as_str().is_some());
        assert_eq!(shop["name"], "Test");
        assert_eq!(shop["imageUrl"], "https://www.google.com");
        assert_eq!(shop["address"]["number"], "42");
        assert!(shop["address"]["id"].as_str().is_some());
        assert_eq!(shop["images"], json!([]));
    }

    #[tokio::test]
    async fn empty_body_reports_every_missing_field() {
        let app = app();
        let resp = send(&app, json_request("POST", "/barberShop", json!({}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = json_body(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["path"], "/barberShop");
        assert!(body["timestamp"].as_i64().is_some());
        assert_eq!(
            body["message"],
            json!({
                "name": "must not be blank",
                "imageUrl": "must not be blank",
                "address": "must not be null"
            })
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let app = app();
        let req = Request::builder()
            .method("POST")
            .uri("/barberShop")
            .header("content-type", "application/json")
            .body(Body::from("{"))
            .unwrap();

        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Bad request");
    }

    #[tokio::test]
    async fn unknown_barber_shop_is_404() {
        let app = app();
        let path = format!("/barberShop/{}", Uuid::new_v4());
        let resp = send(&app, get(&path)).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["path"], path);
    }

    #[tokio::test]
    async fn invalid_uuid_in_path_is_a_bad_request() {
        let app = app();
        let resp = send(&app, get("/barberShop/not-a-uuid")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Bad request");
    }

    #[tokio::test]
    async fn update_barber_shop_returns_202_and_keeps_identity() {
        let app = app();
        let shop = create_shop(&app, "Old").await;
        let id = shop["id"].as_str().unwrap();

        let mut body = shop_body("New");
        body["imageUrl"] = json!("https://new.example.com");
        let resp = send(
            &app,
            json_request("PUT", &format!("/barberShop?barberShopId={}", id), body),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let found = json_body(send(&app, get(&format!("/barberShop/{}", id))).await).await;
        assert_eq!(found["id"], shop["id"]);
        assert_eq!(found["name"], "New");
        assert_eq!(found["imageUrl"], "https://new.example.com");
        assert_eq!(found["createdAt"], shop["createdAt"]);
        assert_eq!(found["address"]["id"], shop["address"]["id"]);
    }

    #[tokio::test]
    async fn update_of_unknown_shop_is_404() {
        let app = app();
        let uri = format!("/barberShop?barberShopId={}", Uuid::new_v4());
        let resp = send(&app, json_request("PUT", &uri, shop_body("X"))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_returns_all_shops_in_one_page() {
        let app = app();
        for name in ["A", "B", "C"] {
            create_shop(&app, name).await;
        }

        let resp = send(&app, get("/barberShop?page=0&size=20")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
        assert_eq!(body["total"], 3);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["page"], 0);
        assert_eq!(body["size"], 20);
    }

    #[tokio::test]
    async fn barber_lifecycle() {
        let app = app();
        let shop = create_shop(&app, "Shop").await;
        let shop_id = shop["id"].as_str().unwrap();

        let resp = send(
            &app,
            json_request("POST", &format!("/barber?barberShopId={}", shop_id), json!({"name": "Zé"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let barber = json_body(resp).await;
        assert_eq!(barber["barberShopId"], shop_id);
        let barber_id = barber["id"].as_str().unwrap();

        let resp = send(
            &app,
            json_request("PUT", &format!("/barber?barberId={}", barber_id), json!({"name": "José"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);

        let found = json_body(send(&app, get(&format!("/barber/{}", barber_id))).await).await;
        assert_eq!(found["name"], "José");

        let page =
            json_body(send(&app, get(&format!("/barber?barberShopId={}", shop_id))).await).await;
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["id"], barber_id);
    }

    #[tokio::test]
    async fn barber_requires_a_name() {
        let app = app();
        let shop = create_shop(&app, "Shop").await;
        let uri = format!("/barber?barberShopId={}", shop["id"].as_str().unwrap());

        let resp = send(&app, json_request("POST", &uri, json!({"name": ""}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await["message"],
            json!({"name": "must not be blank"})
        );
    }

    #[tokio::test]
    async fn listing_barbers_of_an_unknown_shop_is_404() {
        let app = app();
        let uri = format!("/barber?barberShopId={}", Uuid::new_v4());
        let resp = send(&app, get(&uri)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_query_parameter_is_a_bad_request() {
        let app = app();
        let resp = send(&app, json_request("POST", "/barber", json!({"name": "Zé"}))).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Bad request");
    }

    #[tokio::test]
    async fn image_upload_list_and_delete() {
        let app = app();
        let shop = create_shop(&app, "Shop").await;
        let shop_id = shop["id"].as_str().unwrap();

        let resp = send(&app, upload_request(shop_id, b"\x89PNG")).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let image = json_body(resp).await;
        let url = image["url"].as_str().unwrap();
        assert!(url.starts_with(&format!("memory://barber-shops/{}/", shop_id)));
        assert!(url.ends_with(".png"));

        let found = json_body(send(&app, get(&format!("/barberShop/{}", shop_id))).await).await;
        assert_eq!(found["images"][0]["id"], image["id"]);

        let listed =
            json_body(send(&app, get(&format!("/barberShop/{}/images", shop_id))).await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/barberShop/{}/images/{}", shop_id, image["id"].as_str().unwrap()))
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(&app, delete).await.status(), StatusCode::NO_CONTENT);

        let listed =
            json_body(send(&app, get(&format!("/barberShop/{}/images", shop_id))).await).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn uploading_beyond_the_image_limit_is_rejected() {
        let app = app_with_policy(ImagePolicy {
            max_per_shop: 1,
            ..Default::default()
        });
        let shop = create_shop(&app, "Shop").await;
        let shop_id = shop["id"].as_str().unwrap();

        assert_eq!(
            send(&app, upload_request(shop_id, b"one")).await.status(),
            StatusCode::CREATED
        );

        let resp = send(&app, upload_request(shop_id, b"two")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Image limit exceeded");
    }

    #[tokio::test]
    async fn uploading_a_file_over_the_size_limit_is_rejected() {
        let app = app_with_policy(ImagePolicy {
            max_upload_bytes: 8,
            ..Default::default()
        });
        let shop = create_shop(&app, "Shop").await;

        let resp = send(&app, upload_request(shop["id"].as_str().unwrap(), &[0u8; 64])).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"], "Upload too large");
    }

    #[tokio::test]
    async fn upload_without_a_file_part_is_a_validation_error() {
        let app = app();
        let shop = create_shop(&app, "Shop").await;
        let shop_id = shop["id"].as_str().unwrap();

        let resp = send(&app, multipart_request(shop_id, "picture", b"png")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = json_body(resp).await;
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["message"], json!({"file": "must not be null"}));
        assert_eq!(body["path"], format!("/barberShop/{}/images", shop_id));

        let listed =
            json_body(send(&app, get(&format!("/barberShop/{}/images", shop_id))).await).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn uploading_to_an_unknown_shop_is_404() {
        let app = app();
        let resp = send(&app, upload_request(&Uuid::new_v4().to_string(), b"png")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_uses_the_error_envelope() {
        let app = app();
        let resp = send(&app, get("/nowhere")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = json_body(resp).await;
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["message"], "No route for /nowhere");
        assert_eq!(body["path"], "/nowhere");
    }

    #[tokio::test]
    async fn wrong_method_uses_the_error_envelope() {
        let app = app();
        let req = Request::builder()
            .method("DELETE")
            .uri("/barber")
            .body(Body::empty())
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json_body(resp).await["path"], "/barber");
    }

    #[tokio::test]
    async fn health_reports_ok_with_a_reachable_store() {
        let app = app();
        let resp = send(&app, get("/health")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let app = app();
        let req = Request::builder()
            .uri("/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.headers()["x-request-id"], "abc-123");

        let resp = send(&app, get("/health")).await;
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = app();
        let resp = send(&app, get("/api-docs/openapi.json")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let doc = json_body(resp).await;
        assert!(doc["paths"]["/barberShop"].is_object());
        assert!(doc["paths"]["/barber/{id}"].is_object());
    }
}
