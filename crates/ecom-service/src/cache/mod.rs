//! Caching infrastructure for the service layer.
//!
//! Provides a cache abstraction with an in-process implementation. The
//! service uses it for transparent cache-aside reads of product lookups.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::{MemoryCacheService, MemoryCacheServiceParameters, DEFAULT_TTL};
