use crate::{AuthError, Result as AuthErrorResult};

use mo_core::TokenKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried inside every signed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity id)
    pub sub: String,
    /// Identity version at the moment of issuance
    pub version: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Validate claims after signature verification.
    ///
    /// A token is dead from its expiry second onwards, with no leeway.
    #[track_caller]
    pub fn validate(&self, now: i64) -> AuthErrorResult<()> {
        if self.sub.is_empty() || self.version.is_empty() {
            return Err(AuthError::bad_token());
        }

        if self.is_expired_at(now) {
            return Err(AuthError::bad_token());
        }

        Ok(())
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
