use crate::{AppState, health, link, login, metrics, refresh, register, revoke, verify};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/tokens/refresh", post(refresh))
        .route("/auth/verify", get(verify))
        .route("/auth/link", post(link))
        .route("/auth/revoke", post(revoke))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        // Prometheus scrape endpoint
        .route("/metrics", get(metrics::metrics))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
