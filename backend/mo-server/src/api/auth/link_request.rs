use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    /// Identity to link
    pub auth_user_id: String,
    /// External user record owned by another subsystem
    pub user_id: String,
}
