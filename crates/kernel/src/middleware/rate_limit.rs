//! IP-based rate limiting using Redis for distributed counting.
//!
//! A fixed-window counter per client IP, implemented with an atomic
//! INCR + EXPIRE Lua script. Fails open: when Redis is unconfigured or
//! unreachable, requests are allowed through.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use redis::Client as RedisClient;
use tracing::{debug, warn};

use crate::state::AppState;

/// Rate limit configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per client per window.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window: Duration::from_secs(900),
        }
    }
}

/// Rate limiter using Redis for distributed counting.
#[derive(Clone)]
pub struct RateLimiter {
    redis: Option<RedisClient>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Create a new rate limiter. Without a Redis client it always allows.
    pub fn new(redis: Option<RedisClient>, config: RateLimitConfig) -> Self {
        Self { redis, config }
    }

    /// Check if a request should be rate limited.
    ///
    /// Returns Ok(()) if allowed, Err with retry-after seconds if limited.
    pub async fn check(&self, identifier: &str) -> Result<(), u64> {
        let Some(client) = self.redis.as_ref() else {
            return Ok(());
        };

        let key = format!("rate:api:{identifier}");
        let window_secs = self.config.window.as_secs();

        let count = match increment(client, &key, window_secs).await {
            Ok(c) => c,
            Err(e) => {
                // If Redis fails, allow the request (fail open)
                warn!(error = %e, "rate limit check failed, allowing request");
                return Ok(());
            }
        };

        if count > i64::from(self.config.max_requests) {
            debug!(
                identifier = identifier,
                count = count,
                limit = self.config.max_requests,
                "rate limit exceeded"
            );
            Err(window_secs)
        } else {
            Ok(())
        }
    }
}

/// Increment the counter and return the new value.
///
/// Uses a Lua script to atomically INCR + EXPIRE, preventing a race where a
/// crash between the two commands creates an immortal counter.
async fn increment(
    client: &RedisClient,
    key: &str,
    ttl_secs: u64,
) -> Result<i64, redis::RedisError> {
    let mut conn = client.get_multiplexed_async_connection().await?;

    let script = redis::Script::new(
        r"local count = redis.call('INCR', KEYS[1])
          if count == 1 then
            redis.call('EXPIRE', KEYS[1], ARGV[1])
          end
          return count",
    );

    let count: i64 = script
        .key(key)
        .arg(ttl_secs as i64)
        .invoke_async(&mut conn)
        .await?;

    Ok(count)
}

/// Get the client identifier (IP address) for rate limiting.
pub fn get_client_id(addr: Option<SocketAddr>, headers: &axum::http::HeaderMap) -> String {
    // Check X-Forwarded-For header first (for proxied requests)
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
    {
        // Take the first IP in the chain
        if let Some(ip) = value.split(',').next() {
            return ip.trim().to_string();
        }
    }

    // Check X-Real-IP header
    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(value) = real_ip.to_str()
    {
        return value.to_string();
    }

    // Fall back to connection address
    addr.map(|a| a.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Axum middleware applying the rate limiter to every request.
pub async fn throttle(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0);
    let client = get_client_id(addr, req.headers());

    match state.rate_limiter().check(&client).await {
        Ok(()) => next.run(req).await,
        Err(retry_after) => rate_limit_response(retry_after),
    }
}

/// Rate limit exceeded response.
fn rate_limit_response(retry_after: u64) -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [
            ("retry-after", retry_after.to_string()),
            ("content-type", "application/json".to_string()),
        ],
        format!(r#"{{"error":"Rate limit exceeded","retry_after":{retry_after}}}"#),
    )
        .into_response()
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("config", &self.config)
            .field("enabled", &self.redis.is_some())
            .finish()
    }
}
