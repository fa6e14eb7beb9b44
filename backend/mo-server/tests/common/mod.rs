#![allow(dead_code)]

//! Test infrastructure for mo-server API tests

use mo_auth::{IdentityService, PasswordHashConfig, PasswordHasher, TokenCodec, TokenLifetimes};
use mo_server::{AppState, build_router};

use axum_test::TestServer;
use http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde_json::{Value, json};

/// Default signing secret for all tests (HS256 requires at least 32 bytes)
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

/// Create AppState backed by an in-memory database and cheap hashing
pub async fn create_test_app_state() -> AppState {
    let pool = mo_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");

    let hasher = PasswordHasher::new(&PasswordHashConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        max_concurrent: 2,
    })
    .expect("Failed to create hasher");

    let service = IdentityService::new(
        TokenCodec::with_hs256(TEST_SECRET),
        hasher,
        TokenLifetimes::default(),
    );

    AppState::new(pool, service, detached_metrics_handle())
}

/// Recorder handle that is never installed globally, so test processes can
/// build any number of app states
pub fn detached_metrics_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

/// Create a TestServer over the full router
pub async fn create_test_server() -> TestServer {
    let state = create_test_app_state().await;

    TestServer::builder()
        .build(build_router(state))
        .expect("Failed to create test server")
}

pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value"),
    )
}

/// Register and return the new identity id
pub async fn register(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status(http::StatusCode::CREATED);

    let body: Value = response.json();
    body["authUserId"].as_str().unwrap().to_string()
}

/// Log in and return the full response body
pub async fn login(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    response.json()
}
