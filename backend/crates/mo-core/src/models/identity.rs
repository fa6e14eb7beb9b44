use crate::generate_id;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authentication subject, independent of any business-domain user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    /// Reference to a user owned by another subsystem, set by linking
    pub linked_user_id: Option<String>,
    /// Revocation stamp copied into every token at issuance
    pub version: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Fresh identity with a random id, a random version and no link
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            linked_user_id: None,
            version: generate_id(),
            created_at: Utc::now(),
        }
    }

    /// Whether a version stamp taken from a token still matches this identity
    pub fn is_current_version(&self, version: &str) -> bool {
        self.version == version
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}
