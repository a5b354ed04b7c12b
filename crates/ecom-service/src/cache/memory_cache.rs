//! In-process memory cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use ecom_core::EcomResult;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default TTL for cached items (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A single cached value with an optional expiry deadline.
///
/// Public only because it appears in the generated component parameters;
/// not part of the crate API.
pub struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// In-process, concurrent-safe cache service.
///
/// Entries expire lazily: an expired entry is evicted on the read that
/// finds it. The cache lives inside the process; every handle cloned from
/// the same `Arc` sees the same entries.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct MemoryCacheService {
    /// Cached entries keyed by cache key.
    #[shaku(default)]
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Whether caching is enabled.
    #[shaku(default = true)]
    enabled: bool,
    /// Default TTL for cached items.
    #[shaku(default = DEFAULT_TTL)]
    default_ttl: Duration,
}

impl MemoryCacheService {
    /// Create a new enabled memory cache service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: true,
            default_ttl: DEFAULT_TTL,
        }
    }

    /// Create a cache service with a custom default TTL.
    #[must_use]
    pub fn with_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: true,
            default_ttl,
        }
    }

    /// Create a no-op cache service (for when caching is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: false,
            default_ttl: DEFAULT_TTL,
        }
    }
}

impl Default for MemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn get_raw(&self, key: &str) -> EcomResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }

        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if entry.is_expired() => true,
                Some(entry) => {
                    debug!("Cache hit for key '{}'", key);
                    return Ok(Some(entry.value.clone()));
                }
                None => {
                    debug!("Cache miss for key '{}'", key);
                    return Ok(None);
                }
            }
        };

        if expired {
            self.entries.write().remove(key);
            debug!("Cache entry expired for key '{}'", key);
        }

        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> EcomResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now().checked_add(ttl),
        };
        self.entries.write().insert(key.to_string(), entry);

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> EcomResult<bool> {
        if !self.enabled {
            return Ok(false);
        }

        let deleted = self.entries.write().remove(key).is_some();
        debug!("Deleted key '{}': {}", key, deleted);
        Ok(deleted)
    }

    async fn exists(&self, key: &str) -> EcomResult<bool> {
        Ok(self.get_raw(key).await?.is_some())
    }

    fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl std::fmt::Debug for MemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheService")
            .field("enabled", &self.enabled)
            .field("entries", &self.entries.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheExt;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCacheService::new();
        cache.set_raw("key", "\"value\"", DEFAULT_TTL).await.unwrap();

        let value = cache.get_raw("key").await.unwrap();
        assert_eq!(value, Some("\"value\"".to_string()));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = MemoryCacheService::new();
        assert!(cache.get_raw("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_evicted() {
        let cache = MemoryCacheService::new();
        cache
            .set_raw("key", "\"value\"", Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(cache.get_raw("key").await.unwrap().is_none());
        assert!(!cache.exists("key").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCacheService::new();
        cache.set_raw("key", "\"value\"", DEFAULT_TTL).await.unwrap();

        assert!(cache.delete("key").await.unwrap());
        assert!(!cache.delete("key").await.unwrap());
        assert!(cache.get_raw("key").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_disabled_cache_is_noop() {
        let cache = MemoryCacheService::disabled();
        assert!(!cache.is_enabled());

        cache.set_raw("key", "\"value\"", DEFAULT_TTL).await.unwrap();
        assert!(cache.get_raw("key").await.unwrap().is_none());
        assert!(!cache.delete("key").await.unwrap());
    }

    #[tokio::test]
    async fn test_typed_get_and_set() {
        let cache = MemoryCacheService::new();
        cache.set("numbers", &vec![1, 2, 3], DEFAULT_TTL).await.unwrap();

        let numbers: Option<Vec<i32>> = cache.get("numbers").await.unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_default_ttl_reflects_construction() {
        assert_eq!(MemoryCacheService::new().default_ttl(), DEFAULT_TTL);
        assert_eq!(
            MemoryCacheService::with_ttl(Duration::from_secs(60)).default_ttl(),
            Duration::from_secs(60)
        );
    }

    #[tokio::test]
    async fn test_overwrite_existing_key() {
        let cache = MemoryCacheService::new();
        cache.set_raw("key", "\"old\"", DEFAULT_TTL).await.unwrap();
        cache.set_raw("key", "\"new\"", DEFAULT_TTL).await.unwrap();

        assert_eq!(cache.get_raw("key").await.unwrap(), Some("\"new\"".to_string()));
    }
}
