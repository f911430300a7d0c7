// tests/unit/mod.rs

pub mod repository_tests;
pub mod service_tests;
