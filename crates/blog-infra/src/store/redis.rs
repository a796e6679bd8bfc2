//! Redis-backed durable store.
//!
//! Each post is one hash at `<table>:<id>`. There are no secondary indexes:
//! listing walks the key space with `SCAN`.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};

use blog_core::domain::BlogPost;
use blog_core::error::StoreError;
use blog_core::ports::BlogPostRepository;

use super::item::{self, Item};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Fall back to the in-memory store if Redis is unreachable at startup.
    /// Off unless explicitly enabled: the fallback loses every post on restart.
    pub fallback_to_memory: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            fallback_to_memory: false,
        }
    }
}

fn unavailable(e: RedisError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

/// `SCAN MATCH` pattern for every key under `table`, with glob
/// metacharacters in the table name escaped.
fn scan_pattern(table: &str) -> String {
    let mut pattern = String::with_capacity(table.len() + 2);
    for c in table.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push_str(":*");
    pattern
}

/// True when `key` is `<table>:<id>` for a single id segment. Filters out
/// keys of nested namespaces like `posts:archive:<id>`.
fn owns_key(table: &str, key: &str) -> bool {
    key.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .is_some_and(|id| !id.is_empty() && !id.contains(':'))
}

/// Redis blog post store.
///
/// Uses connection manager for automatic reconnection; the manager is cloned
/// per call and shares one multiplexed connection.
pub struct RedisBlogPostStore {
    conn: ConnectionManager,
    table: String,
}

impl RedisBlogPostStore {
    /// Connect to Redis and namespace every key under `table`.
    pub async fn connect(config: &RedisConfig, table: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::open(config.url.as_str()).map_err(unavailable)?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Unavailable("Connection timed out".to_string()))?
            .map_err(unavailable)?;

        let table = table.into();
        tracing::info!(url = %config.url, table = %table, "Connected to Redis store");

        Ok(Self { conn, table })
    }

    fn key(&self, id: &str) -> String {
        format!("{}:{}", self.table, id)
    }
}

#[async_trait]
impl BlogPostRepository for RedisBlogPostStore {
    async fn put(&self, post: &BlogPost) -> Result<(), StoreError> {
        let key = self.key(&post.id.to_string());
        let fields = item::encode(post);
        tracing::debug!(key = %key, "Writing blog post");

        let mut conn = self.conn.clone();
        let _: () = redis::pipe()
            .atomic()
            .del(&key)
            .ignore()
            .hset_multiple(&key, &fields[..])
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let mut conn = self.conn.clone();
        let pattern = scan_pattern(&self.table);

        // SCAN may hand back the same key on more than one page.
        let mut seen = HashSet::new();
        let mut keys: Vec<String> = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, page): (u64, Vec<String>) = redis::cmd("SCAN")
                .cursor_arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .query_async(&mut conn)
                .await
                .map_err(unavailable)?;

            for key in page {
                if owns_key(&self.table, &key) && seen.insert(key.clone()) {
                    keys.push(key);
                }
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }
        tracing::debug!(pattern = %pattern, count = keys.len(), "Scanned blog post keys");

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut pipe = redis::pipe();
        for key in &keys {
            pipe.hgetall(key);
        }
        let items: Vec<Item> = pipe.query_async(&mut conn).await.map_err(unavailable)?;

        // Keys deleted between SCAN and HGETALL come back as empty hashes.
        items
            .into_iter()
            .filter(|item| !item.is_empty())
            .map(item::decode)
            .collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let key = self.key(id);
        tracing::debug!(key = %key, "Reading blog post");

        let mut conn = self.conn.clone();
        let item: HashMap<String, String> = conn.hgetall(&key).await.map_err(unavailable)?;
        if item.is_empty() {
            return Ok(None);
        }
        item::decode(item).map(Some)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let key = self.key(id);
        tracing::debug!(key = %key, "Deleting blog post");

        let mut conn = self.conn.clone();
        conn.del::<_, ()>(&key).await.map_err(unavailable)
    }
}
