//! API router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AuthService, UserService};
use crate::domain::{IdentityProvider, RepositoryProvider};
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::interfaces::http::error::{endpoint_not_found, panic_response, ErrorBody, NotFoundBody};
use crate::interfaces::http::middleware::session_middleware;
use crate::interfaces::http::modules::metrics::{http_metrics_middleware, MetricsState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{auth, gps_tracking, health, leads, photos, users};

/// Shared state for every route. Handlers pull out the piece they need
/// through `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub repos: Arc<dyn RepositoryProvider>,
    pub health: health::HealthState,
    pub metrics: MetricsState,
}

impl AppState {
    /// Wire services on top of a migrated database and an identity provider.
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityProvider>,
        metrics: PrometheusHandle,
    ) -> Self {
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        Self {
            auth: Arc::new(AuthService::new(identity, Arc::clone(&repos))),
            users: Arc::new(UserService::new(Arc::clone(&repos))),
            repos,
            health: health::HealthState {
                db,
                started_at: Arc::new(Instant::now()),
            },
            metrics: MetricsState { handle: metrics },
        }
    }
}

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
                        .description(Some("Access token from POST /api/auth/login"))
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
        auth::get_current_user,
        auth::login,
        auth::register,
        // Users
        users::list_users,
        users::update_role,
        // Photos
        photos::list_photos,
        photos::create_photo,
        // GPS
        gps_tracking::list_pings,
        gps_tracking::record_ping,
        // Leads
        leads::list_leads,
        leads::create_lead,
    ),
    components(
        schemas(
            ErrorBody,
            NotFoundBody,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::RegisterResponse,
            auth::CurrentUserResponse,
            auth::AuthUserDto,
            auth::SessionDto,
            users::UserDto,
            users::CreatorDto,
            users::UpdateRoleRequest,
            photos::PhotoDto,
            photos::CreatePhotoRequest,
            gps_tracking::GpsPingDto,
            gps_tracking::CreateGpsPingRequest,
            leads::LeadDto,
            leads::CreateLeadRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Authentication", description = "Login, registration and session lookup"),
        (name = "Users", description = "User profiles and role changes"),
        (name = "Photos", description = "Geotagged field photos"),
        (name = "GPS Tracking", description = "Agent position pings"),
        (name = "Leads", description = "Sales leads captured in the field"),
    ),
    info(
        title = "Field Operations API",
        version = "1.0.0",
        description = "REST API for field agents: photos, leads and location tracking",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the service router
pub fn create_api_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Auth
        .route("/auth/user", get(auth::get_current_user))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        // Users
        .route("/users", get(users::list_users))
        .route("/users/{id}/role", put(users::update_role))
        // Photos
        .route("/photos", get(photos::list_photos).post(photos::create_photo))
        // GPS
        .route(
            "/gps-tracking",
            get(gps_tracking::list_pings).post(gps_tracking::record_ping),
        )
        // Leads
        .route("/leads", get(leads::list_leads).post(leads::create_lead))
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Ambient
        .route("/health", get(health::health_check))
        .route("/metrics", get(crate::interfaces::http::modules::metrics::prometheus_metrics))
        // API
        .nest("/api", api_routes)
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
