//! In-memory store - used as fallback when Redis is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::BlogPost;
use blog_core::error::StoreError;
use blog_core::ports::BlogPostRepository;

use super::item::{self, Item};

/// In-memory blog post store using a HashMap with async RwLock.
///
/// Records are kept in their encoded [`Item`] form, like the durable store.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostStore {
    items: RwLock<HashMap<String, Item>>,
}

impl InMemoryBlogPostStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostStore {
    async fn put(&self, post: &BlogPost) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.insert(post.id.to_string(), item::to_item(post));
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let items = self.items.read().await;
        items.values().cloned().map(item::decode).collect()
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let items = self.items.read().await;
        items.get(id).cloned().map(item::decode).transpose()
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }
}
