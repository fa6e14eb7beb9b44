use crate::{ID_LENGTH, Identity};

#[test]
fn test_new_identity_has_no_link() {
    let identity = Identity::new();

    assert!(identity.linked_user_id.is_none());
    assert_eq!(identity.id.len(), ID_LENGTH);
    assert_eq!(identity.version.len(), ID_LENGTH);
}

#[test]
fn test_new_identity_id_and_version_differ() {
    let identity = Identity::new();

    assert_ne!(identity.id, identity.version);
}

#[test]
fn test_is_current_version() {
    let identity = Identity::new();
    let stale = Identity::new();

    assert!(identity.is_current_version(&identity.version));
    assert!(!identity.is_current_version(&stale.version));
}
