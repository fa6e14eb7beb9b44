pub mod id;
pub mod models;

pub use id::{ID_ALPHABET, ID_LENGTH, generate_id};
pub use models::credential::Credential;
pub use models::identity::Identity;
pub use models::token_kind::TokenKind;

#[cfg(test)]
mod tests;
