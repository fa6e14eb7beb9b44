use crate::TokenResponse;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub auth_user_id: String,
    pub user_id: Option<String>,
    pub tokens: TokenResponse,
}
