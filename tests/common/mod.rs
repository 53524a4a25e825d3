// Common test utilities

pub mod helpers;

#[allow(unused_imports)]
pub use helpers::{body_json, create_test_app, get, post_json, post_raw};
