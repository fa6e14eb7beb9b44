use chrono::{DateTime, Utc};

/// Email/password pair bound to exactly one identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    /// Encoded output of the password hasher, never plaintext
    pub password_hash: String,
    pub identity_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(email: &str, password_hash: String, identity_id: &str) -> Self {
        let now = Utc::now();

        Self {
            email: email.to_string(),
            password_hash,
            identity_id: identity_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
