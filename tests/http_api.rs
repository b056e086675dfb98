//! End-to-end tests driving the router against an in-memory database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use fieldops::domain::{CreateGpsPingDto, CreateUserDto, RepositoryProvider, UserRole};
use fieldops::infrastructure::crypto::jwt::JwtConfig;
use fieldops::infrastructure::database::migrator::Migrator;
use fieldops::infrastructure::{init_database, DatabaseConfig, LocalIdentityProvider, LocalIdentitySettings};
use fieldops::{create_api_router, AppState};

struct TestApp {
    router: Router,
    repos: Arc<dyn RepositoryProvider>,
}

async fn test_app() -> TestApp {
    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let identity = Arc::new(LocalIdentityProvider::new(
        db.clone(),
        LocalIdentitySettings {
            jwt: JwtConfig {
                secret: "http-test-secret".to_string(),
                expiration_hours: 1,
                issuer: "field-ops-test".to_string(),
            },
            bcrypt_cost: 4,
        },
    ));
    let metrics = PrometheusBuilder::new().build_recorder().handle();

    let state = AppState::new(db, identity, metrics);
    let repos = Arc::clone(&state.repos);
    TestApp {
        router: create_api_router(state),
        repos,
    }
}

impl TestApp {
    async fn raw(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        self.raw(builder.body(body).unwrap()).await
    }

    async fn register(&self, email: &str, full_name: &str) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/register",
                Some(json!({"email": email, "password": "secret-pass", "fullName": full_name})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body
    }
}

fn is_not_found_body(body: &Value) -> bool {
    *body == json!({"message": "API endpoint not found"})
}

#[tokio::test]
async fn lead_is_returned_with_its_creator() {
    let app = test_app().await;
    let registered = app.register("agent@example.com", "Field Agent").await;
    let user_id = registered["profile"]["id"].as_str().unwrap().to_string();

    let (status, lead) = app
        .send(
            "POST",
            "/api/leads",
            Some(json!({
                "user_id": user_id,
                "contact_name": "Ann",
                "contact_phone": "555",
                "contact_email": "ann@x.io",
                "business_name": "Ann's",
                "latitude": 1.0,
                "longitude": 2.0,
                "notes": "hot"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{lead}");
    assert!(!lead["id"].as_str().unwrap().is_empty());
    assert_eq!(lead["user_id"], json!(user_id));
    assert_eq!(lead["contact_name"], "Ann");
    assert_eq!(lead["business_name"], "Ann's");
    assert_eq!(lead["notes"], "hot");
    assert!(lead["created_at"].is_string());
    assert_eq!(
        lead["users"],
        json!({"id": user_id, "full_name": "Field Agent", "role": "agent"})
    );

    let (status, leads) = app.send("GET", "/api/leads", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leads.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn photo_and_ping_embed_the_submitter() {
    let app = test_app().await;
    let registered = app.register("snap@example.com", "Snap").await;
    let user_id = registered["profile"]["id"].as_str().unwrap().to_string();

    let (status, photo) = app
        .send(
            "POST",
            "/api/photos",
            Some(json!({
                "user_id": user_id,
                "image_url": "https://cdn.example.com/1.jpg",
                "latitude": 41.3,
                "longitude": 69.2
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{photo}");
    assert_eq!(photo["users"]["id"], json!(user_id));
    assert_eq!(photo["description"], "");

    let (status, ping) = app
        .send(
            "POST",
            "/api/gps-tracking",
            Some(json!({"user_id": user_id, "latitude": 41.3, "longitude": 69.2})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{ping}");
    assert_eq!(ping["activity_type"], "active");
    assert_eq!(ping["users"]["full_name"], "Snap");
}

#[tokio::test]
async fn insert_for_unknown_user_is_a_store_error() {
    let app = test_app().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/photos",
            Some(json!({
                "user_id": "ghost",
                "image_url": "https://cdn.example.com/1.jpg",
                "latitude": 0.0,
                "longitude": 0.0
            })),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert_ne!(message, "Internal server error");
}

#[tokio::test]
async fn out_of_range_coordinates_are_rejected() {
    let app = test_app().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/gps-tracking",
            Some(json!({"user_id": "u1", "latitude": 91.0, "longitude": 0.0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("latitude"));
}

#[tokio::test]
async fn gps_listing_is_capped_and_newest_first() {
    let app = test_app().await;
    let agent = app
        .repos
        .users()
        .create_user(CreateUserDto {
            id: "u1".to_string(),
            email: "walker@example.com".to_string(),
            full_name: "Walker".to_string(),
            role: UserRole::Agent,
        })
        .await
        .unwrap();
    for i in 0..105 {
        app.repos
            .gps_pings()
            .record_ping(CreateGpsPingDto {
                user_id: agent.id.clone(),
                latitude: (i % 90) as f64,
                longitude: 0.0,
                activity_type: None,
            })
            .await
            .unwrap();
    }

    let (status, body) = app.send("GET", "/api/gps-tracking", None).await;
    assert_eq!(status, StatusCode::OK);
    let pings = body.as_array().unwrap();
    assert_eq!(pings.len(), 100);

    let stamps: Vec<chrono::DateTime<chrono::Utc>> = pings
        .iter()
        .map(|p| p["timestamp"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn unknown_routes_answer_with_the_not_found_body() {
    let app = test_app().await;

    let (status, body) = app.send("GET", "/api/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(is_not_found_body(&body));

    // Known path, unsupported method
    let (status, body) = app.send("DELETE", "/api/photos", Some(json!({"x": 1}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(is_not_found_body(&body));

    let request = Request::builder()
        .method("PATCH")
        .uri("/api/users/abc/role/extra")
        .body(Body::from("definitely not json"))
        .unwrap();
    let (status, body) = app.raw(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(is_not_found_body(&body));
}

#[tokio::test]
async fn malformed_json_is_an_internal_error() {
    let app = test_app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/leads")
        .header("content-type", "application/json")
        .body(Body::from("{\"user_id\": "))
        .unwrap();

    let (status, body) = app.raw(request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn login_with_unknown_account_is_a_bad_request() {
    let app = test_app().await;
    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "nobody@example.com", "password": "whatever"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(body.get("user").is_none());
    assert!(body.get("session").is_none());
}

#[tokio::test]
async fn login_session_resolves_on_auth_user() {
    let app = test_app().await;
    app.register("agent@example.com", "Field Agent").await;

    let (status, login) = app
        .send(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "agent@example.com", "password": "secret-pass"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{login}");
    assert_eq!(login["profile"]["full_name"], "Field Agent");
    assert_eq!(login["session"]["token_type"], "bearer");
    let token = login["session"]["access_token"].as_str().unwrap();

    let request = Request::builder()
        .uri("/api/auth/user")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.raw(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], login["user"]["id"]);

    let (status, body) = app.send("GET", "/api/auth/user", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .uri("/api/auth/user")
        .header("authorization", "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.raw(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn failed_profile_insert_leaves_no_identity() {
    let app = test_app().await;
    // Profile exists under the email first, so the registration's profile
    // insert fails and the identity is rolled back.
    app.repos
        .users()
        .create_user(CreateUserDto {
            id: "legacy".to_string(),
            email: "taken@example.com".to_string(),
            full_name: "Legacy".to_string(),
            role: UserRole::Agent,
        })
        .await
        .unwrap();

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register",
            Some(json!({"email": "taken@example.com", "password": "secret-pass", "fullName": "New"})),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    // No identity was left behind
    let (status, body) = app
        .send(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "taken@example.com", "password": "secret-pass"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid login credentials");
}

#[tokio::test]
async fn registration_rejects_unknown_roles_and_duplicates() {
    let app = test_app().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register",
            Some(json!({"email": "x@example.com", "password": "secret-pass", "fullName": "X", "role": "owner"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("owner"));

    app.register("x@example.com", "X").await;
    let (status, body) = app
        .send(
            "POST",
            "/api/auth/register",
            Some(json!({"email": "x@example.com", "password": "secret-pass", "fullName": "X"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User already registered");
}

#[tokio::test]
async fn role_updates_follow_the_allow_list() {
    let app = test_app().await;
    let registered = app.register("agent@example.com", "Field Agent").await;
    let id = registered["profile"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/users/{id}/role");

    let (status, _) = app.send("PUT", &uri, Some(json!({"role": "superuser"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, users) = app.send("GET", "/api/users", None).await;
    assert_eq!(users[0]["role"], "agent");

    let (status, user) = app.send("PUT", &uri, Some(json!({"role": "admin"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["role"], "admin");

    let (status, body) = app
        .send("PUT", "/api/users/missing/role", Some(json!({"role": "admin"})))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn ambient_routes_are_served() {
    let app = test_app().await;

    let (status, health) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["database"]["status"], "ok");

    let (status, doc) = app.send("GET", "/api-doc/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/leads"].is_object());

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-42");
}
