use crate::{
    ARGON2_MIN_MEMORY_PER_LANE_KIB, ConfigError, ConfigErrorResult,
    DEFAULT_ACCESS_TOKEN_LIFETIME_SECS, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_MAX_CONCURRENT_HASHES, DEFAULT_REFRESH_TOKEN_LIFETIME_SECS,
    MAX_MAX_CONCURRENT_HASHES, MIN_SECRET_LENGTH,
};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret (required)
    pub secret: Option<String>,
    pub access_token_lifetime_secs: u64,
    pub refresh_token_lifetime_secs: u64,
    /// Argon2id memory cost
    pub hash_memory_kib: u32,
    /// Argon2id passes
    pub hash_iterations: u32,
    /// Argon2id lanes
    pub hash_parallelism: u32,
    /// Hash/verify jobs allowed to run at once
    pub max_concurrent_hashes: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: None,
            access_token_lifetime_secs: DEFAULT_ACCESS_TOKEN_LIFETIME_SECS,
            refresh_token_lifetime_secs: DEFAULT_REFRESH_TOKEN_LIFETIME_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
            max_concurrent_hashes: DEFAULT_MAX_CONCURRENT_HASHES,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_lifetime_secs", &self.access_token_lifetime_secs)
            .field("refresh_token_lifetime_secs", &self.refresh_token_lifetime_secs)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("hash_iterations", &self.hash_iterations)
            .field("hash_parallelism", &self.hash_parallelism)
            .field("max_concurrent_hashes", &self.max_concurrent_hashes)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self
            .secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.secret is required (set MO_AUTH_SECRET)"))?;

        if secret.chars().count() < MIN_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.secret must be at least {} characters",
                MIN_SECRET_LENGTH
            )));
        }

        if self.access_token_lifetime_secs == 0 {
            return Err(ConfigError::auth(
                "auth.access_token_lifetime_secs must be at least 1",
            ));
        }

        if self.refresh_token_lifetime_secs == 0 {
            return Err(ConfigError::auth(
                "auth.refresh_token_lifetime_secs must be at least 1",
            ));
        }

        if self.hash_iterations == 0 {
            return Err(ConfigError::auth("auth.hash_iterations must be at least 1"));
        }

        if self.hash_parallelism == 0 {
            return Err(ConfigError::auth("auth.hash_parallelism must be at least 1"));
        }

        let min_memory = self
            .hash_parallelism
            .saturating_mul(ARGON2_MIN_MEMORY_PER_LANE_KIB);
        if self.hash_memory_kib < min_memory {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be at least {} for parallelism {}, got {}",
                min_memory, self.hash_parallelism, self.hash_memory_kib
            )));
        }

        if self.max_concurrent_hashes == 0 || self.max_concurrent_hashes > MAX_MAX_CONCURRENT_HASHES
        {
            return Err(ConfigError::auth(format!(
                "auth.max_concurrent_hashes must be 1-{}, got {}",
                MAX_MAX_CONCURRENT_HASHES, self.max_concurrent_hashes
            )));
        }

        Ok(())
    }

    pub fn access_token_lifetime(&self) -> Duration {
        Duration::from_secs(self.access_token_lifetime_secs)
    }

    pub fn refresh_token_lifetime(&self) -> Duration {
        Duration::from_secs(self.refresh_token_lifetime_secs)
    }
}
