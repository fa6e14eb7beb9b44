//! Axum extractor for `Authorization: Bearer <token>`

use crate::ApiError;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Raw token taken from the Authorization header.
///
/// A missing header, another scheme or an empty token is rejected as
/// `BadToken`, the same as an invalid token.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(AUTHORIZATION) else {
                log::debug!("Request has no Authorization header");
                return Err(ApiError::bad_token());
            };

            let Ok(value) = header_value.to_str() else {
                log::debug!("Authorization header is not valid ASCII");
                return Err(ApiError::bad_token());
            };

            match value.split_once(' ') {
                Some((scheme, token))
                    if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
                {
                    Ok(BearerToken(token.trim().to_string()))
                }
                _ => {
                    log::debug!("Authorization header is not a bearer token");
                    Err(ApiError::bad_token())
                }
            }
        }
    }
}
