#![allow(dead_code)]

mod test_service;

pub use test_service::{
    TEST_SECRET, create_test_pool, create_test_service, create_test_service_with_lifetimes,
    lifetimes_secs, sleep_until,
};
