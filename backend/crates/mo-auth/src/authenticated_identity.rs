use mo_core::Identity;

/// Outcome of a successful register, login or token verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub identity_id: String,
    /// Current link, read at the moment of the operation
    pub linked_user_id: Option<String>,
}

impl From<Identity> for AuthenticatedIdentity {
    fn from(identity: Identity) -> Self {
        Self {
            identity_id: identity.id,
            linked_user_id: identity.linked_user_id,
        }
    }
}
