//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Redis connection URL. When unset, caching is disabled and rate
    /// limiting fails open.
    pub redis_url: Option<String>,

    /// TTL in seconds for cached count/summary responses (default: 120).
    pub cache_ttl_secs: u64,

    /// Maximum API requests per client per window (default: 100).
    pub rate_limit_max: u32,

    /// Rate limit window in seconds (default: 900).
    pub rate_limit_window_secs: u64,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Deployment environment name reported by /api/v1/info
    /// (default: "development").
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let redis_url = env::var("REDIS_URL").ok().filter(|v| !v.is_empty());

        let cache_ttl_secs = env::var("CACHE_TTL")
            .unwrap_or_else(|_| "120".to_string())
            .parse()
            .context("CACHE_TTL must be a valid u64")?;

        let rate_limit_max = env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .context("API_RATE_LIMIT must be a valid u32")?;

        let rate_limit_window_secs = env::var("API_RATE_WINDOW_SECS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .context("API_RATE_WINDOW_SECS must be a valid u64")?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            port,
            redis_url,
            cache_ttl_secs,
            rate_limit_max,
            rate_limit_window_secs,
            cors_allowed_origins,
            environment,
        })
    }
}
