//! Middleware.

mod rate_limit;

pub use rate_limit::{RateLimitConfig, RateLimiter, get_client_id, throttle};
