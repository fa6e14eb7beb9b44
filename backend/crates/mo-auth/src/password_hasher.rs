use crate::{AuthError, PasswordHashConfig, Result as AuthErrorResult};

use std::panic::Location;
use std::sync::Arc;

use argon2::password_hash::{self, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};
use error_location::ErrorLocation;
use tokio::sync::{OnceCell, Semaphore};

const SALT_LEN: usize = 16;
const DECOY_PASSWORD: &str = "decoy-password-never-issued";

/// Argon2id password hashing off the async executor.
///
/// Each call holds a semaphore permit for the duration of the blocking job, so
/// at most `max_concurrent` hashes burn CPU and memory at any time.
#[derive(Clone)]
pub struct PasswordHasher {
    params: Params,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) decoy: Arc<OnceCell<String>>,
}

impl PasswordHasher {
    #[track_caller]
    pub fn new(config: &PasswordHashConfig) -> AuthErrorResult<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AuthError::PasswordHash {
            message: format!("Invalid Argon2 parameters: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            params,
            permits: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
            decoy: Arc::new(OnceCell::new()),
        })
    }

    /// Hash `password` with a fresh random salt into a PHC string
    pub async fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let _permit = self.permits.acquire().await.map_err(|e| AuthError::Blocking {
            message: format!("Hash permit unavailable: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let params = self.params.clone();
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hash_blocking(params, &password))
            .await
            .map_err(|e| AuthError::Blocking {
                message: format!("Hash task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    /// Check `password` against a stored PHC string.
    ///
    /// Cost parameters are read from the stored hash, so hashes written under
    /// older settings keep verifying.
    pub async fn verify(&self, password: &str, encoded: &str) -> AuthErrorResult<bool> {
        let _permit = self.permits.acquire().await.map_err(|e| AuthError::Blocking {
            message: format!("Verify permit unavailable: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let password = password.to_string();
        let encoded = encoded.to_string();

        tokio::task::spawn_blocking(move || verify_blocking(&password, &encoded))
            .await
            .map_err(|e| AuthError::Blocking {
                message: format!("Verify task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    /// Run a full verify against a hash no credential owns.
    ///
    /// Used when the email is unknown so the rejection costs the same as a
    /// wrong password. The decoy is hashed once with the configured cost.
    pub async fn verify_decoy(&self, password: &str) -> AuthErrorResult<()> {
        let encoded = self
            .decoy
            .get_or_try_init(|| self.hash(DECOY_PASSWORD))
            .await?;

        self.verify(password, encoded).await?;
        Ok(())
    }
}

fn hash_blocking(params: Params, password: &str) -> AuthErrorResult<String> {
    let salt_bytes: [u8; SALT_LEN] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
        message: format!("Salt encoding failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

fn verify_blocking(password: &str, encoded: &str) -> AuthErrorResult<bool> {
    let parsed = PasswordHash::new(encoded).map_err(|e| AuthError::PasswordHash {
        message: format!("Stored hash is malformed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
