use crate::{
    AuthError, AuthenticatedIdentity, PasswordHasher, Result as AuthErrorResult, TokenCodec,
    TokenLifetimes, TokenPair,
};

use mo_core::{Credential, Identity, TokenKind, generate_id};
use mo_db::{CredentialRepository, IdentityRepository};

use log::{debug, info, warn};
use metrics::counter;
use sqlx::SqliteConnection;

/// Registration, login, token issuance and verification, linking and revocation.
///
/// Every operation runs against the connection it is handed. Callers that need
/// all-or-nothing behaviour pass a transaction (`&mut *tx`) and commit only on
/// `Ok`.
pub struct IdentityService {
    codec: TokenCodec,
    hasher: PasswordHasher,
    lifetimes: TokenLifetimes,
}

impl IdentityService {
    pub fn new(codec: TokenCodec, hasher: PasswordHasher, lifetimes: TokenLifetimes) -> Self {
        Self {
            codec,
            hasher,
            lifetimes,
        }
    }

    /// Create an identity bound to a new email/password credential.
    ///
    /// Emails are stored and matched verbatim.
    pub async fn register(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<AuthenticatedIdentity> {
        if CredentialRepository::exists(&mut *conn, email).await? {
            debug!("Registration rejected: credential already exists");
            return Err(AuthError::credential_exists());
        }

        let password_hash = self.hasher.hash(password).await?;

        let identity = Identity::new();
        IdentityRepository::create(&mut *conn, &identity).await?;

        let credential = Credential::new(email, password_hash, &identity.id);
        CredentialRepository::create(&mut *conn, &credential)
            .await
            .map_err(|e| {
                // Lost a race with a concurrent registration for the same email
                if e.is_unique_violation() {
                    AuthError::credential_exists()
                } else {
                    AuthError::from(e)
                }
            })?;

        counter!("auth_register_total").increment(1);
        info!("Registered identity {}", identity.id);

        Ok(identity.into())
    }

    /// Authenticate with email and password.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`, and
    /// both pay for one Argon2 verify.
    pub async fn login(
        &self,
        conn: &mut SqliteConnection,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<AuthenticatedIdentity> {
        let Some(credential) = CredentialRepository::find_by_email(&mut *conn, email).await? else {
            self.hasher.verify_decoy(password).await?;
            counter!("auth_login_total", "outcome" => "failure").increment(1);
            debug!("Login rejected: unknown email");
            return Err(AuthError::invalid_credentials());
        };

        if !self
            .hasher
            .verify(password, &credential.password_hash)
            .await?
        {
            counter!("auth_login_total", "outcome" => "failure").increment(1);
            debug!("Login rejected: password mismatch");
            return Err(AuthError::invalid_credentials());
        }

        let identity = IdentityRepository::find_by_id(&mut *conn, &credential.identity_id)
            .await?
            .ok_or_else(|| {
                warn!(
                    "Credential references missing identity {}",
                    credential.identity_id
                );
                AuthError::not_found(&credential.identity_id)
            })?;

        counter!("auth_login_total", "outcome" => "success").increment(1);
        debug!("Identity {} logged in", identity.id);

        Ok(identity.into())
    }

    /// Set or overwrite the external user an identity refers to.
    ///
    /// Linking the same user to several identities is allowed.
    pub async fn link(
        &self,
        conn: &mut SqliteConnection,
        identity_id: &str,
        user_id: &str,
    ) -> AuthErrorResult<()> {
        if !IdentityRepository::update_linked_user(&mut *conn, identity_id, user_id).await? {
            return Err(AuthError::not_found(identity_id));
        }

        info!("Linked identity {} to user {}", identity_id, user_id);
        Ok(())
    }

    /// Invalidate every token issued to the identity so far.
    ///
    /// Tokens issued afterwards carry the new version and are unaffected.
    pub async fn revoke(&self, conn: &mut SqliteConnection, identity_id: &str) -> AuthErrorResult<()> {
        let version = generate_id();

        if !IdentityRepository::update_version(&mut *conn, identity_id, &version).await? {
            return Err(AuthError::not_found(identity_id));
        }

        counter!("auth_revoke_total").increment(1);
        info!("Revoked all tokens for identity {}", identity_id);
        Ok(())
    }

    /// Mint an access/refresh pair stamped with the identity's current version
    pub async fn issue_tokens(
        &self,
        conn: &mut SqliteConnection,
        identity_id: &str,
    ) -> AuthErrorResult<TokenPair> {
        let identity = IdentityRepository::find_by_id(&mut *conn, identity_id)
            .await?
            .ok_or_else(|| AuthError::not_found(identity_id))?;

        self.mint_pair(&identity)
    }

    /// Check signature, expiry, kind and version, then return the live identity.
    ///
    /// The link is read from storage, not from the token, so a link made after
    /// issuance is visible. All token failures collapse to `BadToken`.
    pub async fn verify_token(
        &self,
        conn: &mut SqliteConnection,
        token: &str,
        expected_kind: TokenKind,
    ) -> AuthErrorResult<AuthenticatedIdentity> {
        let claims = match self.codec.parse(token) {
            Ok(claims) => claims,
            Err(e) => {
                counter!("auth_verify_total", "outcome" => "bad_token").increment(1);
                return Err(e);
            }
        };

        if claims.kind != expected_kind {
            counter!("auth_verify_total", "outcome" => "bad_token").increment(1);
            debug!(
                "Token rejected: expected {} but got {}",
                expected_kind, claims.kind
            );
            return Err(AuthError::bad_token());
        }

        let identity = IdentityRepository::find_by_id(&mut *conn, &claims.sub)
            .await?
            .ok_or_else(|| {
                counter!("auth_verify_total", "outcome" => "not_found").increment(1);
                AuthError::not_found(&claims.sub)
            })?;

        if !identity.is_current_version(&claims.version) {
            counter!("auth_verify_total", "outcome" => "bad_token").increment(1);
            debug!("Token rejected: identity {} was revoked", identity.id);
            return Err(AuthError::bad_token());
        }

        counter!("auth_verify_total", "outcome" => "success").increment(1);
        Ok(identity.into())
    }

    /// Exchange a valid refresh token for a new pair.
    ///
    /// The version is not rotated, so earlier refresh tokens stay usable until
    /// they expire or the identity is revoked.
    pub async fn refresh(
        &self,
        conn: &mut SqliteConnection,
        refresh_token: &str,
    ) -> AuthErrorResult<TokenPair> {
        let authenticated = self
            .verify_token(&mut *conn, refresh_token, TokenKind::Refresh)
            .await?;

        self.issue_tokens(&mut *conn, &authenticated.identity_id)
            .await
    }

    fn mint_pair(&self, identity: &Identity) -> AuthErrorResult<TokenPair> {
        let access = self.codec.issue(
            &identity.id,
            &identity.version,
            TokenKind::Access,
            self.lifetimes.for_kind(TokenKind::Access),
        )?;
        let refresh = self.codec.issue(
            &identity.id,
            &identity.version,
            TokenKind::Refresh,
            self.lifetimes.for_kind(TokenKind::Refresh),
        )?;

        counter!("auth_tokens_issued_total").increment(2);

        Ok(TokenPair {
            access_expiry: access.expires_at(),
            refresh_expiry: refresh.expires_at(),
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }
}
