use std::sync::Arc;

use chrono::Utc;

use crate::domain::{BlogPost, NewBlogPost, SortOrder, sort_by_created_at};
use crate::error::StoreError;
use crate::ports::BlogPostRepository;

/// Stateless blog post operations over a shared repository handle.
///
/// Store failures are returned to the caller untouched; nothing is retried.
#[derive(Clone)]
pub struct BlogPostService {
    repo: Arc<dyn BlogPostRepository>,
}

impl BlogPostService {
    pub fn new(repo: Arc<dyn BlogPostRepository>) -> Self {
        Self { repo }
    }

    /// Assign an id and creation time, then persist the post.
    pub async fn create(&self, input: NewBlogPost) -> Result<BlogPost, StoreError> {
        let post = BlogPost::new(input, Utc::now());
        self.repo.put(&post).await?;
        tracing::info!(post_id = %post.id, "Blog post created");
        Ok(post)
    }

    /// All posts ordered by creation time.
    pub async fn list(&self, order: SortOrder) -> Result<Vec<BlogPost>, StoreError> {
        let mut posts = self.repo.scan_all().await?;
        sort_by_created_at(&mut posts, order);
        Ok(posts)
    }

    pub async fn get(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        self.repo.get_by_id(id).await
    }

    /// Delete without checking existence first.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(post_id = %id, "Blog post deleted");
        Ok(())
    }
}
