//! # Ecom Service
//!
//! Business logic layer for the product catalog. The product service sits
//! between the REST controllers and the repository, adding validation,
//! DTO mapping, and cache-aside reads over the backing store.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod product_service;

pub use cache::{CacheExt, CacheInterface, MemoryCacheService, MemoryCacheServiceParameters};
pub use dto::*;
pub use product_service::ProductService;
pub use r#impl::ProductServiceComponent;
