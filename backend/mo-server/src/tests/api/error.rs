use crate::ApiError;

use mo_auth::AuthError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn status_and_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Identity abc not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Identity abc not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Email must contain '@'", "email");

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_bad_token_returns_401_without_field() {
    let (status, json) = status_and_json(ApiError::bad_token()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "BAD_TOKEN");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_credential_exists_converts_to_409_conflict() {
    let error = ApiError::from(AuthError::credential_exists());

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_invalid_credentials_converts_to_401() {
    let error = ApiError::from(AuthError::invalid_credentials());

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_auth_not_found_converts_to_404() {
    let error = ApiError::from(AuthError::not_found("abc"));

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"]["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_infrastructure_failure_returns_500_without_details() {
    let error = ApiError::from(AuthError::PasswordHash {
        message: "argon2 internal detail".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = status_and_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("argon2")
    );
}

#[test]
fn test_sqlx_error_converts_to_internal() {
    let error = ApiError::from(sqlx::Error::PoolTimedOut);

    assert!(matches!(error, ApiError::Internal { .. }));
}
