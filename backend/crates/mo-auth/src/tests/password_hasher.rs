use crate::{AuthError, PasswordHashConfig, PasswordHasher};

use googletest::prelude::*;

fn cheap_config() -> PasswordHashConfig {
    PasswordHashConfig {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        max_concurrent: 2,
    }
}

#[tokio::test]
async fn given_hashed_password_when_verified_with_same_password_then_true() {
    // Given
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();
    let hash = hasher.hash("pw1234567").await.unwrap();

    // When
    let result = hasher.verify("pw1234567", &hash).await;

    // Then
    assert_that!(result, ok(anything()));
    assert!(result.unwrap());
}

#[tokio::test]
async fn given_hashed_password_when_verified_with_other_password_then_false() {
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();
    let hash = hasher.hash("pw1234567").await.unwrap();

    let result = hasher.verify("pw7654321", &hash).await.unwrap();

    assert!(!result);
}

#[tokio::test]
async fn given_config_when_hashed_then_phc_string_records_argon2id_cost() {
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();

    let hash = hasher.hash("pw1234567").await.unwrap();

    assert_that!(hash, starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
}

#[tokio::test]
async fn given_same_password_when_hashed_twice_then_salts_differ() {
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();

    let first = hasher.hash("pw1234567").await.unwrap();
    let second = hasher.hash("pw1234567").await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn given_hash_from_other_cost_when_verified_then_still_matches() {
    // Given - stored under a higher memory cost
    let old_hasher = PasswordHasher::new(&PasswordHashConfig {
        memory_kib: 2048,
        ..cheap_config()
    })
    .unwrap();
    let hash = old_hasher.hash("pw1234567").await.unwrap();
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();

    // When
    let result = hasher.verify("pw1234567", &hash).await.unwrap();

    // Then
    assert!(result);
}

#[tokio::test]
async fn given_malformed_stored_hash_when_verified_then_returns_password_hash_error() {
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();

    let result = hasher.verify("pw1234567", "not-a-phc-string").await;

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}

#[test]
fn given_memory_below_argon2_minimum_when_created_then_returns_error() {
    let config = PasswordHashConfig {
        memory_kib: 4,
        ..cheap_config()
    };

    let result = PasswordHasher::new(&config);

    assert!(matches!(result, Err(AuthError::PasswordHash { .. })));
}

#[tokio::test]
async fn given_single_permit_when_many_hashes_requested_then_all_complete() {
    // Given
    let hasher = PasswordHasher::new(&PasswordHashConfig {
        max_concurrent: 1,
        ..cheap_config()
    })
    .unwrap();

    // When
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let hasher = hasher.clone();
            tokio::spawn(async move { hasher.hash(&format!("password-{}", i)).await })
        })
        .collect();

    // Then
    for handle in handles {
        let hash = handle.await.unwrap().unwrap();
        assert_that!(hash, starts_with("$argon2id$"));
    }
}

#[test]
fn test_default_config_uses_recommended_argon2id_cost() {
    let config = PasswordHashConfig::default();

    assert_eq!(config.memory_kib, 19_456);
    assert_eq!(config.iterations, 2);
    assert_eq!(config.parallelism, 1);
    assert_eq!(config.max_concurrent, 4);
}

#[tokio::test]
async fn given_fresh_hasher_when_decoy_verified_then_decoy_uses_configured_cost() {
    // Given
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();
    assert!(hasher.decoy.get().is_none());

    // When
    let result = hasher.verify_decoy("pw1234567").await;

    // Then
    assert_that!(result, ok(anything()));
    let decoy = hasher.decoy.get().unwrap();
    assert_that!(decoy.as_str(), starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
}

#[tokio::test]
async fn given_decoy_already_hashed_when_verified_again_then_same_decoy_is_reused() {
    let hasher = PasswordHasher::new(&cheap_config()).unwrap();
    hasher.verify_decoy("first").await.unwrap();
    let first = hasher.decoy.get().unwrap().clone();

    hasher.verify_decoy("second").await.unwrap();

    assert_that!(hasher.decoy.get(), some(eq(&first)));
}
