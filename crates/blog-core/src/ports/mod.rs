//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod api_docs;
mod repository;

pub use api_docs::{ApiDescriptionProvider, DescriptionError};
pub use repository::BlogPostRepository;
