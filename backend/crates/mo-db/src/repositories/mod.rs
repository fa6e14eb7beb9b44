pub mod credential_repository;
pub mod identity_repository;
