//! Store Adapter implementations - Redis and in-memory fallback.

pub mod item;
mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use memory::InMemoryBlogPostStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisBlogPostStore, RedisConfig};
