pub mod auth;
pub mod credentials_request;
pub mod identity_response;
pub mod link_request;
pub mod login_response;
pub mod token_response;
