//! Read-through cache over an optional Redis store.
//!
//! Used for count and summary responses, which are cheap to recompute but
//! hot. The layer is fail-soft in every direction: no configured Redis,
//! unreachable Redis, and undecodable stored values all degrade to "call the
//! producer"; callers always get a value and never see a store error. There
//! is deliberately no single-flight dedup — concurrent misses recompute
//! independently, which is harmless because producers are pure functions of
//! immutable catalog data.

use redis::AsyncCommands;
use redis::Client as RedisClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Health of the backing store as seen by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHealth {
    /// No REDIS_URL configured; the layer is a pass-through.
    NotConfigured,
    Healthy,
    Unhealthy,
}

impl CacheHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheHealth::NotConfigured => "not_configured",
            CacheHealth::Healthy => "healthy",
            CacheHealth::Unhealthy => "unhealthy",
        }
    }
}

/// Fail-soft read-through cache.
#[derive(Clone)]
pub struct CacheLayer {
    redis: Option<RedisClient>,
}

impl CacheLayer {
    /// Create a cache layer. `None` disables caching entirely.
    pub fn new(redis: Option<RedisClient>) -> Self {
        Self { redis }
    }

    /// A layer that never caches (used when REDIS_URL is unset).
    pub fn disabled() -> Self {
        Self { redis: None }
    }

    /// Whether a backing store is configured.
    pub fn is_enabled(&self) -> bool {
        self.redis.is_some()
    }

    /// Look up a JSON-encoded value. Any failure is a miss.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let client = self.redis.as_ref()?;

        let mut conn = match client.get_multiplexed_async_connection().await {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "failed to get Redis connection for cache get");
                return None;
            }
        };

        let raw: Option<String> = match conn.get(key).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, key = %key, "cache get failed");
                return None;
            }
        };

        let raw = raw?;
        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key = %key, "cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(error = %e, key = %key, "cached value failed to decode, ignoring");
                None
            }
        }
    }

    /// Store a JSON-encoded value with a TTL. Failures are logged and
    /// swallowed.
    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T, ttl_secs: u64) {
        let Some(client) = self.redis.as_ref() else {
            return;
        };

        let raw = match serde_json::to_string(value) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, key = %key, "failed to encode value for cache");
                return;
            }
        };

        let Ok(mut conn) = client.get_multiplexed_async_connection().await else {
            warn!("failed to get Redis connection for cache set");
            return;
        };

        if let Err(e) = conn.set_ex::<_, _, ()>(key, raw, ttl_secs).await {
            warn!(error = %e, key = %key, "cache set failed");
            return;
        }

        debug!(key = %key, ttl = %ttl_secs, "cache set");
    }

    /// Delete a cached value.
    pub async fn delete(&self, key: &str) {
        let Some(client) = self.redis.as_ref() else {
            return;
        };

        let Ok(mut conn) = client.get_multiplexed_async_connection().await else {
            warn!("failed to get Redis connection for cache delete");
            return;
        };

        if let Err(e) = conn.del::<_, ()>(key).await {
            warn!(error = %e, key = %key, "cache delete failed");
        }
    }

    /// Get-or-compute-and-store.
    ///
    /// On hit, returns the stored value; on miss (or any store failure),
    /// invokes the producer, stores the result under `key` with `ttl_secs`,
    /// and returns it.
    pub async fn get_or_compute<T, F>(&self, key: &str, ttl_secs: u64, producer: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(hit) = self.get_json(key).await {
            return hit;
        }

        let value = producer();
        self.set_json(key, &value, ttl_secs).await;
        value
    }

    /// Probe the backing store with a PING.
    pub async fn probe(&self) -> CacheHealth {
        let Some(client) = self.redis.as_ref() else {
            return CacheHealth::NotConfigured;
        };

        let Ok(mut conn) = client.get_multiplexed_async_connection().await else {
            return CacheHealth::Unhealthy;
        };

        match redis::cmd("PING").query_async::<String>(&mut conn).await {
            Ok(_) => CacheHealth::Healthy,
            Err(_) => CacheHealth::Unhealthy,
        }
    }
}

impl std::fmt::Debug for CacheLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheLayer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_layer_always_misses() {
        let cache = CacheLayer::disabled();
        assert!(!cache.is_enabled());
        assert_eq!(cache.get_json::<u32>("some:key").await, None);
        assert_eq!(cache.probe().await, CacheHealth::NotConfigured);
    }

    #[tokio::test]
    async fn disabled_layer_degrades_to_producer() {
        let cache = CacheLayer::disabled();
        let value = cache.get_or_compute("some:key", 60, || 42u32).await;
        assert_eq!(value, 42);

        // Still recomputes: nothing was stored.
        let value = cache.get_or_compute("some:key", 60, || 7u32).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn disabled_layer_set_and_delete_are_noops() {
        let cache = CacheLayer::disabled();
        cache.set_json("k", &1u32, 60).await;
        cache.delete("k").await;
        assert_eq!(cache.get_json::<u32>("k").await, None);
    }
}
