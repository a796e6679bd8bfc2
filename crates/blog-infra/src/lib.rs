//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! This crate contains the Store Adapters and API description providers.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `redis` - Redis-backed durable store
//! - `http-docs` - API description fetched from an HTTP export endpoint

pub mod docs;
pub mod store;

// Re-exports - In-Memory
pub use docs::StaticDescriptionProvider;
pub use store::InMemoryBlogPostStore;

// Re-exports - Remote
#[cfg(feature = "http-docs")]
pub use docs::HttpDescriptionProvider;
#[cfg(feature = "redis")]
pub use store::{RedisBlogPostStore, RedisConfig};
