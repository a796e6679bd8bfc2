use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog post entity - the only record type the service persists.
///
/// Posts are immutable once created: there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    /// Fixed-width ISO-8601 instant, see [`format_timestamp`].
    pub created_at: String,
}

impl BlogPost {
    /// Create a new post with a generated id, stamped at `now`.
    pub fn new(input: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            author: input.author,
            content: input.content,
            created_at: format_timestamp(now),
        }
    }
}

/// Caller-supplied fields of a post that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl NewBlogPost {
    /// Check that every caller-supplied field is present.
    ///
    /// Empty strings are accepted; only absent fields are rejected. The error
    /// lists every missing field, in declaration order.
    pub fn validate(
        title: Option<String>,
        author: Option<String>,
        content: Option<String>,
    ) -> Result<Self, DomainError> {
        let missing: Vec<String> = [
            ("title", title.is_none()),
            ("author", author.is_none()),
            ("content", content.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name.to_string())
        .collect();

        match (title, author, content) {
            (Some(title), Some(author), Some(content)) => Ok(Self {
                title,
                author,
                content,
            }),
            _ => Err(DomainError::Validation(missing)),
        }
    }
}

/// Render an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Width is fixed, so lexical order of the output equals chronological order.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
