//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use redis::Client as RedisClient;
use tracing::info;

use crate::cache::CacheLayer;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::middleware::{RateLimitConfig, RateLimiter};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Read-only entity catalog.
    catalog: Catalog,

    /// Fail-soft read-through cache for count/summary responses.
    cache: CacheLayer,

    /// IP rate limiter (fail-open without Redis).
    rate_limiter: RateLimiter,

    /// TTL for cached count/summary responses.
    cache_ttl_secs: u64,

    /// Deployment environment name reported by /api/v1/info.
    environment: String,
}

impl AppState {
    /// Create application state backed by the seed catalog.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_catalog(config, Catalog::seeded())
    }

    /// Create application state with an explicit catalog (used by tests to
    /// inject isolated fixtures).
    pub fn with_catalog(config: &Config, catalog: Catalog) -> Result<Self> {
        // The client connects lazily; a missing URL just disables caching
        // and rate limiting degrades to fail-open.
        let redis = match config.redis_url.as_deref() {
            Some(url) => {
                let client =
                    RedisClient::open(url).context("failed to create Redis client")?;
                info!("Redis configured; caching enabled");
                Some(client)
            }
            None => {
                info!("REDIS_URL not set; caching disabled");
                None
            }
        };

        let cache = CacheLayer::new(redis.clone());
        let rate_limiter = RateLimiter::new(
            redis,
            RateLimitConfig {
                max_requests: config.rate_limit_max,
                window: Duration::from_secs(config.rate_limit_window_secs),
            },
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cache,
                rate_limiter,
                cache_ttl_secs: config.cache_ttl_secs,
                environment: config.environment.clone(),
            }),
        })
    }

    /// Get the entity catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get the cache layer.
    pub fn cache(&self) -> &CacheLayer {
        &self.inner.cache
    }

    /// Get the rate limiter.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.inner.rate_limiter
    }

    /// TTL for cached count/summary responses.
    pub fn cache_ttl_secs(&self) -> u64 {
        self.inner.cache_ttl_secs
    }

    /// Deployment environment name.
    pub fn environment(&self) -> &str {
        &self.inner.environment
    }
}
