pub mod credential;
pub mod identity;
pub mod token_kind;
