use crate::{AuthError, Claims, Result as AuthErrorResult};

use mo_core::TokenKind;

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;

/// A freshly signed token together with the claims it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

impl IssuedToken {
    /// Expiry as enforced by `TokenCodec::parse`
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at()
    }
}

/// Signs and verifies tokens with a single shared HS256 secret.
///
/// Whoever holds the secret can both mint and verify.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    validation: Validation,
}

impl TokenCodec {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            validation,
        }
    }

    /// Sign a token for `identity_id` stamped with `version`.
    ///
    /// Expiry is whole seconds after issuance, so the returned claims are
    /// exactly what verification will later enforce.
    #[track_caller]
    pub fn issue(
        &self,
        identity_id: &str,
        version: &str,
        kind: TokenKind,
        lifetime: Duration,
    ) -> AuthErrorResult<IssuedToken> {
        let issued_at = Utc::now().timestamp();
        let lifetime_secs = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);

        let claims = Claims {
            sub: identity_id.to_string(),
            version: version.to_string(),
            kind,
            iat: issued_at,
            exp: issued_at.saturating_add(lifetime_secs),
        };

        let token = encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify signature and expiry and return the claims.
    ///
    /// Every failure is reported as `BadToken`; the cause is only logged.
    #[track_caller]
    pub fn parse(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                AuthError::bad_token()
            })?;

        token_data.claims.validate(Utc::now().timestamp())?;

        Ok(token_data.claims)
    }
}
