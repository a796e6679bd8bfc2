//! Application configuration loaded from environment variables.

use std::env;

use anyhow::Context;

#[cfg(feature = "redis")]
use std::time::Duration;

#[cfg(feature = "redis")]
use blog_infra::store::RedisConfig;

/// Default identifier of the API description.
const DEFAULT_API_ID: &str = "blog-api";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Name of the durable store; every key lives under this namespace.
    pub table_name: String,
    /// Identifier of the API description served by `/api-docs`.
    pub api_id: String,
    /// Export URL template for the remote API description.
    pub api_description_url: Option<String>,
    #[cfg(feature = "redis")]
    pub redis: Option<RedisConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = get("TABLE_NAME")
            .filter(|name| !name.is_empty())
            .context("TABLE_NAME must be set to the name of the blog post store")?;

        #[cfg(feature = "redis")]
        let redis = get("REDIS_URL").map(|url| RedisConfig {
            url,
            connect_timeout: Duration::from_secs(
                get("REDIS_CONNECT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            fallback_to_memory: get("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        });

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            table_name,
            api_id: get("API_ID").unwrap_or_else(|| DEFAULT_API_ID.to_string()),
            api_description_url: get("API_DESCRIPTION_URL"),
            #[cfg(feature = "redis")]
            redis,
        })
    }
}
