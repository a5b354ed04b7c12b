//! # Ecom Config
//!
//! Layered configuration management for the product catalog.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
