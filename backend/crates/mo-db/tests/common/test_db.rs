use mo_core::{Credential, Identity};
use mo_db::{CredentialRepository, IdentityRepository};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    mo_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a fresh identity and returns it
pub async fn create_test_identity(pool: &SqlitePool) -> Identity {
    let identity = Identity::new();

    IdentityRepository::create(pool, &identity)
        .await
        .expect("Failed to create test identity");

    identity
}

/// Inserts a credential bound to `identity_id` with a placeholder hash
pub async fn create_test_credential(pool: &SqlitePool, email: &str, identity_id: &str) -> Credential {
    let credential = Credential::new(email, "$argon2id$placeholder".to_string(), identity_id);

    CredentialRepository::create(pool, &credential)
        .await
        .expect("Failed to create test credential");

    credential
}
