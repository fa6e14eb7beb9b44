#![allow(dead_code)]

mod test_db;

pub use test_db::{create_test_credential, create_test_identity, create_test_pool};
