pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{link, login, refresh, register, revoke, verify},
        credentials_request::CredentialsRequest,
        identity_response::IdentityResponse,
        link_request::LinkRequest,
        login_response::LoginResponse,
        token_response::TokenResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::bearer_token::BearerToken,
};
pub use app_state::{AppState, build_identity_service};

pub use crate::routes::build_router;
