//! Identity REST API handlers
//!
//! Each handler runs in a single transaction, committed only on success.
//! Returning early with an error drops the transaction, which rolls it back.

use crate::api::validation::{validate_email, validate_password, validate_required};
use crate::{
    ApiResult, AppState, BearerToken, CredentialsRequest, IdentityResponse, LinkRequest,
    LoginResponse, TokenResponse,
};

use mo_auth::TokenKind;

use axum::{Json, extract::State, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/register
///
/// Create an identity with an email/password credential
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<IdentityResponse>)> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    let mut tx = state.pool.begin().await?;
    let identity = state
        .service
        .register(&mut tx, &request.email, &request.password)
        .await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(identity.into())))
}

/// POST /auth/login
///
/// Authenticate and receive a fresh token pair
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    let mut tx = state.pool.begin().await?;
    let identity = state
        .service
        .login(&mut tx, &request.email, &request.password)
        .await?;
    let tokens = state
        .service
        .issue_tokens(&mut tx, &identity.identity_id)
        .await?;
    tx.commit().await?;

    Ok(Json(LoginResponse {
        auth_user_id: identity.identity_id,
        user_id: identity.linked_user_id,
        tokens: tokens.into(),
    }))
}

/// POST /auth/tokens/refresh
///
/// Exchange the bearer refresh token for a new pair
pub async fn refresh(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<TokenResponse>> {
    let mut tx = state.pool.begin().await?;
    let tokens = state.service.refresh(&mut tx, &token).await?;
    tx.commit().await?;

    Ok(Json(tokens.into()))
}

/// GET /auth/verify
///
/// Resolve the bearer access token to its identity and current link
pub async fn verify(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Json<IdentityResponse>> {
    let mut tx = state.pool.begin().await?;
    let identity = state
        .service
        .verify_token(&mut tx, &token, TokenKind::Access)
        .await?;
    tx.commit().await?;

    Ok(Json(identity.into()))
}

/// POST /auth/link
///
/// Point an identity at an external user record
pub async fn link(
    State(state): State<AppState>,
    Json(request): Json<LinkRequest>,
) -> ApiResult<StatusCode> {
    validate_required(&request.auth_user_id, "authUserId")?;
    validate_required(&request.user_id, "userId")?;

    let mut tx = state.pool.begin().await?;
    state
        .service
        .link(&mut tx, &request.auth_user_id, &request.user_id)
        .await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /auth/revoke
///
/// Invalidate every token issued so far to the caller's identity
pub async fn revoke(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<StatusCode> {
    let mut tx = state.pool.begin().await?;
    let identity = state
        .service
        .verify_token(&mut tx, &token, TokenKind::Access)
        .await?;
    state.service.revoke(&mut tx, &identity.identity_id).await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
