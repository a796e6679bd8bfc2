//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogPostService;
use blog_core::ports::{ApiDescriptionProvider, BlogPostRepository};
use blog_infra::{InMemoryBlogPostStore, StaticDescriptionProvider};

use serde::Serialize;

use crate::config::AppConfig;

/// Which store implementation is serving requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Redis,
}

/// Shared application state.
///
/// Holds the one store handle created at startup; clones share it.
#[derive(Clone)]
pub struct AppState {
    pub blog_posts: BlogPostService,
    pub api_docs: Arc<dyn ApiDescriptionProvider>,
    pub store_backend: StoreBackend,
}

impl AppState {
    pub fn new(
        store: Arc<dyn BlogPostRepository>,
        api_docs: Arc<dyn ApiDescriptionProvider>,
    ) -> Self {
        Self {
            blog_posts: BlogPostService::new(store),
            api_docs,
            store_backend: StoreBackend::Memory,
        }
    }

    pub fn with_store_backend(mut self, backend: StoreBackend) -> Self {
        self.store_backend = backend;
        self
    }

    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let (store, backend) = init_store(config).await?;
        let api_docs = init_api_docs(config);

        tracing::info!(store = ?backend, "Application state initialized");

        Ok(Self::new(store, api_docs).with_store_backend(backend))
    }
}

type Store = (Arc<dyn BlogPostRepository>, StoreBackend);

fn in_memory() -> Store {
    (Arc::new(InMemoryBlogPostStore::new()), StoreBackend::Memory)
}

#[cfg(feature = "redis")]
async fn init_store(config: &AppConfig) -> anyhow::Result<Store> {
    use anyhow::Context;
    use blog_infra::RedisBlogPostStore;

    let Some(redis) = &config.redis else {
        tracing::warn!("REDIS_URL not set. Running without durable store (in-memory mode).");
        return Ok(in_memory());
    };

    match RedisBlogPostStore::connect(redis, config.table_name.as_str()).await {
        Ok(store) => Ok((Arc::new(store), StoreBackend::Redis)),
        Err(e) if redis.fallback_to_memory => {
            tracing::error!(
                "Failed to connect to Redis: {}. REDIS_FALLBACK_TO_MEMORY is set, posts will not survive a restart.",
                e
            );
            Ok(in_memory())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to connect to Redis at {}", redis.url)),
    }
}

#[cfg(not(feature = "redis"))]
async fn init_store(_config: &AppConfig) -> anyhow::Result<Store> {
    tracing::info!("Running without redis feature - using in-memory store");
    Ok(in_memory())
}

fn init_api_docs(config: &AppConfig) -> Arc<dyn ApiDescriptionProvider> {
    match &config.api_description_url {
        #[cfg(feature = "http-docs")]
        Some(url) => {
            let provider = blog_infra::HttpDescriptionProvider::new(url, &config.api_id);
            tracing::info!(url = %provider.url(), "Serving API description from export endpoint");
            Arc::new(provider)
        }
        #[cfg(not(feature = "http-docs"))]
        Some(_) => {
            tracing::warn!("API_DESCRIPTION_URL ignored - built without http-docs feature");
            Arc::new(StaticDescriptionProvider::new(config.api_id.as_str()))
        }
        None => Arc::new(StaticDescriptionProvider::new(config.api_id.as_str())),
    }
}
