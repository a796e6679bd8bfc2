//! List ordering.

use super::BlogPost;

/// Requested order of the post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Interpret the `order` query value. Only `asc` selects ascending order.
    pub fn from_query(order: Option<&str>) -> Self {
        match order {
            Some("asc") => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }
}

/// Sort posts by `created_at`, comparing the timestamp strings.
///
/// The sort is stable: posts with equal timestamps keep their input order.
pub fn sort_by_created_at(posts: &mut [BlogPost], order: SortOrder) {
    match order {
        SortOrder::Ascending => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Descending => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}
