pub mod authenticated_identity;
pub mod claims;
pub mod error;
pub mod identity_service;
pub mod password_hash_config;
pub mod password_hasher;
pub mod token_codec;
pub mod token_lifetimes;
pub mod token_pair;

pub use authenticated_identity::AuthenticatedIdentity;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity_service::IdentityService;
pub use password_hash_config::PasswordHashConfig;
pub use password_hasher::PasswordHasher;
pub use token_codec::{IssuedToken, TokenCodec};
pub use token_lifetimes::TokenLifetimes;
pub use token_pair::TokenPair;

pub use mo_core::TokenKind;

#[cfg(test)]
mod tests;
