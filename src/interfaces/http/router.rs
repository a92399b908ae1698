//! API Router with Swagger UI

use axum::{
    http::Uri,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::MessageResponse;
use super::error::{ApiError, ErrorBody};
use super::middleware::{auth_middleware, AuthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics};
use super::modules::request_id::request_id_middleware;
use super::modules::{
    activity_logs, analytics, auth, change_requests, health, invoices, notifications,
    upload_assets, users, websites,
};
use super::state::AppState;
use crate::application::DashboardStats;
use crate::domain::{
    ActivityAction, ActivityLog, AssetType, ChangeRequest, DomainError, Invoice, InvoiceLineItem,
    InvoiceStatus, Notification, NotificationKind, Plan, PublicUser, RequestStatus, Role,
    UploadAsset, Website, WebsiteStatus,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::signup,
        auth::login,
        auth::me,
        auth::update_profile,
        auth::change_password,
        // Users
        users::list_clients,
        users::get_user,
        // Websites
        websites::list_websites,
        websites::get_website,
        websites::create_website,
        websites::update_website,
        // Change requests
        change_requests::list_change_requests,
        change_requests::get_change_request,
        change_requests::create_change_request,
        change_requests::review_change_request,
        // Invoices
        invoices::list_invoices,
        invoices::get_invoice,
        invoices::create_invoice,
        invoices::update_invoice,
        invoices::pay_invoice,
        // Upload assets
        upload_assets::list_upload_assets,
        upload_assets::get_upload_asset,
        upload_assets::create_upload_asset,
        // Notifications
        notifications::list_notifications,
        notifications::mark_notification_read,
        notifications::mark_all_notifications_read,
        // Activity
        activity_logs::list_activity_logs,
        // Analytics
        analytics::dashboard,
    ),
    components(
        schemas(
            // Common
            ErrorBody,
            MessageResponse,
            health::HealthResponse,
            health::ComponentHealth,
            // Auth & users
            Role,
            PublicUser,
            auth::SignupRequest,
            auth::LoginRequest,
            auth::AuthResponse,
            auth::UpdateProfileRequest,
            auth::ChangePasswordRequest,
            // Websites
            Plan,
            WebsiteStatus,
            Website,
            websites::CreateWebsiteRequest,
            websites::UpdateWebsiteRequest,
            // Change requests
            RequestStatus,
            ChangeRequest,
            change_requests::CreateChangeRequestRequest,
            change_requests::ReviewChangeRequestRequest,
            // Invoices
            InvoiceStatus,
            InvoiceLineItem,
            Invoice,
            invoices::CreateInvoiceRequest,
            invoices::UpdateInvoiceRequest,
            // Upload assets
            AssetType,
            UploadAsset,
            upload_assets::CreateUploadAssetRequest,
            // Notifications & activity
            NotificationKind,
            Notification,
            ActivityAction,
            ActivityLog,
            // Analytics
            DashboardStats,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service and storage health"),
        (name = "Authentication", description = "Signup, login (JWT), profile and password"),
        (name = "Users", description = "Admin directory of client accounts"),
        (name = "Websites", description = "Client websites managed by the service"),
        (name = "Change Requests", description = "Client change requests and admin review"),
        (name = "Invoices", description = "Invoicing and payment"),
        (name = "Upload Assets", description = "Images, copy and files attached to a website"),
        (name = "Notifications", description = "Per-user notifications"),
        (name = "Activity Logs", description = "Audit feed of user actions"),
        (name = "Analytics", description = "Dashboard figures"),
    ),
    info(
        title = "SiteKeeper Portal API",
        version = "1.0.0",
        description = "REST API of the SiteKeeper website-management portal",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Unknown routes answer with the shared error body
async fn route_not_found(uri: Uri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError(DomainError::not_found("Route", uri.path()))
}

/// Create the API router with all routes
pub fn create_api_router(state: AppState) -> Router {
    let auth_state = AuthState {
        tokens: state.tokens.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login));

    // Everything else requires a bearer token
    let protected_routes = Router::new()
        // Auth
        .route("/auth/me", get(auth::me))
        .route("/auth/profile", put(auth::update_profile))
        .route("/auth/change-password", put(auth::change_password))
        // Users
        .route("/users", get(users::list_clients))
        .route("/users/{id}", get(users::get_user))
        // Websites
        .route(
            "/websites",
            get(websites::list_websites).post(websites::create_website),
        )
        .route(
            "/websites/{id}",
            get(websites::get_website).put(websites::update_website),
        )
        // Change requests
        .route(
            "/change-requests",
            get(change_requests::list_change_requests)
                .post(change_requests::create_change_request),
        )
        .route(
            "/change-requests/{id}",
            get(change_requests::get_change_request)
                .patch(change_requests::review_change_request),
        )
        // Invoices
        .route(
            "/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/invoices/{id}",
            get(invoices::get_invoice).patch(invoices::update_invoice),
        )
        .route("/invoices/{id}/pay", post(invoices::pay_invoice))
        // Upload assets
        .route(
            "/upload-assets",
            get(upload_assets::list_upload_assets).post(upload_assets::create_upload_asset),
        )
        .route("/upload-assets/{id}", get(upload_assets::get_upload_asset))
        // Notifications
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/read-all",
            patch(notifications::mark_all_notifications_read),
        )
        .route(
            "/notifications/{id}/read",
            patch(notifications::mark_notification_read),
        )
        // Activity & analytics
        .route("/activity-logs", get(activity_logs::list_activity_logs))
        .route("/analytics/dashboard", get(analytics::dashboard))
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Prometheus scrape endpoint
        .route("/metrics", get(prometheus_metrics))
        // REST API
        .nest("/api", public_routes.merge(protected_routes))
        .fallback(route_not_found)
        .with_state(state)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::Service;

    use crate::application::IdentitySettings;
    use crate::infrastructure::{InMemoryStore, JwtAuthority, JwtConfig};

    fn app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(JwtAuthority::new(JwtConfig {
                secret: "router-test".into(),
                expiration_hours: 1,
                issuer: "sitekeeper-test".into(),
            })),
            IdentitySettings {
                bcrypt_cost: 4,
                allow_admin_signup: false,
            },
            PrometheusBuilder::new().build_recorder().handle(),
        );
        create_api_router(state)
    }

    async fn get_status(uri: &str) -> StatusCode {
        let mut svc = app().into_service();
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        svc.call(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn health_is_public() {
        assert_eq!(get_status("/api/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn resources_need_a_token() {
        assert_eq!(get_status("/api/websites").await, StatusCode::UNAUTHORIZED);
        assert_eq!(get_status("/api/analytics/dashboard").await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_route_is_a_json_404() {
        let mut svc = app().into_service();
        let req = Request::builder()
            .uri("/api/nothing-here")
            .body(Body::empty())
            .unwrap();
        let resp = svc.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Route not found");
    }

    #[test]
    fn openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/websites",
            "/api/change-requests/{id}",
            "/api/invoices/{id}/pay",
            "/api/notifications/read-all",
            "/api/analytics/dashboard",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
