use crate::{ApiError, BearerToken};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(authorization: Option<&str>) -> Result<BearerToken, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    BearerToken::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let result = extract(Some("Bearer abc.def.ghi")).await;

    assert!(result.is_ok());
    assert_eq!(result.ok().unwrap().0, "abc.def.ghi");
}

#[tokio::test]
async fn test_extractor_accepts_lowercase_scheme() {
    let result = extract(Some("bearer abc.def.ghi")).await;

    assert_eq!(result.ok().unwrap().0, "abc.def.ghi");
}

#[tokio::test]
async fn test_extractor_without_header_is_bad_token() {
    let result = extract(None).await;

    assert!(matches!(result, Err(ApiError::BadToken { .. })));
}

#[tokio::test]
async fn test_extractor_with_other_scheme_is_bad_token() {
    let result = extract(Some("Basic dXNlcjpwYXNz")).await;

    assert!(matches!(result, Err(ApiError::BadToken { .. })));
}

#[tokio::test]
async fn test_extractor_with_empty_token_is_bad_token() {
    let result = extract(Some("Bearer ")).await;

    assert!(matches!(result, Err(ApiError::BadToken { .. })));
}
