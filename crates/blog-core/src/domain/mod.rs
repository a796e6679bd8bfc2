//! Domain entities - the core business objects.

mod blog_post;
mod sort;

pub use blog_post::{BlogPost, NewBlogPost, format_timestamp};
pub use sort::{SortOrder, sort_by_created_at};
