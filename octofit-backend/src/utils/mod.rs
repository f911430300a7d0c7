// src/utils/mod.rs
pub mod error_helper;
pub mod validation;
