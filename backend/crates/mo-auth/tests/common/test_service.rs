use mo_auth::{
    IdentityService, PasswordHashConfig, PasswordHasher, TokenCodec, TokenLifetimes,
};

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    mo_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Service with cheap hashing and the default token lifetimes
pub fn create_test_service() -> IdentityService {
    create_test_service_with_lifetimes(TokenLifetimes::default())
}

pub fn create_test_service_with_lifetimes(lifetimes: TokenLifetimes) -> IdentityService {
    let hasher = PasswordHasher::new(&PasswordHashConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        max_concurrent: 2,
    })
    .expect("Failed to create hasher");

    IdentityService::new(TokenCodec::with_hs256(TEST_SECRET), hasher, lifetimes)
}

pub fn lifetimes_secs(access: u64, refresh: u64) -> TokenLifetimes {
    TokenLifetimes {
        access: Duration::from_secs(access),
        refresh: Duration::from_secs(refresh),
    }
}

/// Sleeps until just past `instant`
pub async fn sleep_until(instant: DateTime<Utc>) {
    let remaining = (instant - Utc::now()).to_std().unwrap_or_default();
    tokio::time::sleep(remaining + Duration::from_millis(50)).await;
}
