use mo_auth::AuthenticatedIdentity;

use serde::Serialize;

/// Identity id plus its current link (`null` when unlinked)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub auth_user_id: String,
    pub user_id: Option<String>,
}

impl From<AuthenticatedIdentity> for IdentityResponse {
    fn from(identity: AuthenticatedIdentity) -> Self {
        Self {
            auth_user_id: identity.identity_id,
            user_id: identity.linked_user_id,
        }
    }
}
