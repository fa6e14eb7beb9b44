use crate::error::Result as ServerErrorResult;

use mo_auth::{IdentityService, PasswordHashConfig, PasswordHasher, TokenCodec, TokenLifetimes};
use mo_config::{AuthConfig, ConfigError};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub service: Arc<IdentityService>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(pool: SqlitePool, service: IdentityService, metrics: PrometheusHandle) -> Self {
        Self {
            pool,
            service: Arc::new(service),
            metrics,
        }
    }
}

/// Build the identity service from validated auth settings
pub fn build_identity_service(auth: &AuthConfig) -> ServerErrorResult<IdentityService> {
    let secret = auth
        .secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.secret is required (set MO_AUTH_SECRET)"))?;

    let hasher = PasswordHasher::new(&PasswordHashConfig {
        memory_kib: auth.hash_memory_kib,
        iterations: auth.hash_iterations,
        parallelism: auth.hash_parallelism,
        max_concurrent: auth.max_concurrent_hashes,
    })?;

    let lifetimes = TokenLifetimes {
        access: auth.access_token_lifetime(),
        refresh: auth.refresh_token_lifetime(),
    };

    Ok(IdentityService::new(
        TokenCodec::with_hs256(secret.as_bytes()),
        hasher,
        lifetimes,
    ))
}
