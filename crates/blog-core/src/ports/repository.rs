use async_trait::async_trait;

use crate::domain::BlogPost;
use crate::error::StoreError;

/// Store Adapter - durable key-value persistence of blog posts, keyed by id.
///
/// Implementations hold one long-lived client handle and must be safe to call
/// concurrently from many requests.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Write the full post under its id, replacing any existing record.
    async fn put(&self, post: &BlogPost) -> Result<(), StoreError>;

    /// Every stored post, in store-native (unspecified) order.
    async fn scan_all(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// The post stored under `id`, or `None` if there is none.
    ///
    /// `id` is opaque: it need not be a valid UUID.
    async fn get_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError>;

    /// Remove the post stored under `id`. Succeeds when no such post exists.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
