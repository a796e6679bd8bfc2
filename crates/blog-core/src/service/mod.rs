//! Use-case layer - orchestrates the domain and the Store Adapter.

mod blog_post_service;

pub use blog_post_service::BlogPostService;
