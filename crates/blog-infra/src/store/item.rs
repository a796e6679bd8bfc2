//! Item codec - maps a [`BlogPost`] to and from the flat string map the
//! stores keep per record.

use std::collections::HashMap;

use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::StoreError;

/// Store-native representation of one record: attribute name to string value.
pub type Item = HashMap<String, String>;

const ID: &str = "id";
const TITLE: &str = "title";
const AUTHOR: &str = "author";
const CONTENT: &str = "content";
const CREATED_AT: &str = "createdAt";

/// Encode every field of the post as a string attribute.
pub fn encode(post: &BlogPost) -> Vec<(&'static str, String)> {
    vec![
        (ID, post.id.to_string()),
        (TITLE, post.title.clone()),
        (AUTHOR, post.author.clone()),
        (CONTENT, post.content.clone()),
        (CREATED_AT, post.created_at.clone()),
    ]
}

/// Decode a stored item. Attributes not belonging to a post are dropped.
pub fn decode(mut item: Item) -> Result<BlogPost, StoreError> {
    let mut take = |name: &str| {
        item.remove(name)
            .ok_or_else(|| StoreError::Decode(format!("missing attribute `{}`", name)))
    };

    let raw_id = take(ID)?;
    let id = Uuid::parse_str(&raw_id)
        .map_err(|e| StoreError::Decode(format!("invalid id `{}`: {}", raw_id, e)))?;

    Ok(BlogPost {
        id,
        title: take(TITLE)?,
        author: take(AUTHOR)?,
        content: take(CONTENT)?,
        created_at: take(CREATED_AT)?,
    })
}

/// Convert an encoded post into an owned [`Item`].
pub fn to_item(post: &BlogPost) -> Item {
    encode(post)
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
