#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use wedsite_api::auth::jwt::{generate_access_token, JwtConfig};
use wedsite_api::auth::password::hash_password;
use wedsite_api::config::ServerConfig;
use wedsite_api::router::build_app_router;
use wedsite_api::state::AppState;
use wedsite_core::clock::{Clock, FixedClock};
use wedsite_core::types::{DbId, Timestamp};
use wedsite_db::models::user::CreateUser;
use wedsite_db::repositories::{UserRepo, UserRoleRepo};

pub const TEST_PASSWORD: &str = "pandorica-opens";

/// The configured countdown target used by every test app.
pub fn event_target() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 5, 6, 16, 0, 0).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        event_target: event_target(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
        bootstrap_admin: None,
    }
}

/// Full application router over `pool`, reading time from the system clock.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_clock(pool, Arc::new(wedsite_core::clock::SystemClock))
}

/// Full application router with the clock pinned at `now`.
pub fn build_test_app_at(pool: PgPool, now: Timestamp) -> Router {
    build_test_app_with_clock(pool, Arc::new(FixedClock(now)))
}

fn build_test_app_with_clock(pool: PgPool, clock: Arc<dyn Clock>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Insert a user with `role` (or no role row) and return its id.
pub async fn create_user(pool: &PgPool, email: &str, role: Option<&str>) -> DbId {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
        },
    )
    .await
    .unwrap();
    if let Some(role) = role {
        UserRoleRepo::assign(pool, user.id, role).await.unwrap();
    }
    user.id
}

/// A valid bearer token for `user_id` carrying `role`.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, Utc::now(), &test_config().jwt).unwrap()
}

/// Create a user with `role` and return `(user_id, token)`.
pub async fn login_as(pool: &PgPool, email: &str, role: &str) -> (DbId, String) {
    let id = create_user(pool, email, Some(role)).await;
    (id, token_for(id, role))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
