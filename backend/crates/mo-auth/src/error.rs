use mo_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced by the identity service.
///
/// `InvalidCredentials` and `BadToken` carry no sub-cause.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Credential already exists {location}")]
    CredentialExists { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Identity not found: {identity_id} {location}")]
    NotFound {
        identity_id: String,
        location: ErrorLocation,
    },

    #[error("Bad token {location}")]
    BadToken { location: ErrorLocation },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Blocking task failed: {message} {location}")]
    Blocking {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn credential_exists() -> Self {
        Self::CredentialExists {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(identity_id: &str) -> Self {
        Self::NotFound {
            identity_id: identity_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_token() -> Self {
        Self::BadToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CredentialExists { .. } => "CREDENTIAL_EXISTS",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::BadToken { .. } => "BAD_TOKEN",
            Self::Database { .. }
            | Self::PasswordHash { .. }
            | Self::TokenEncode { .. }
            | Self::Blocking { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
