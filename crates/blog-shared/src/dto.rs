//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /blogposts`.
///
/// Fields are optional on the wire so that absent ones can be reported
/// together by validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Query string of `GET /blogposts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBlogPostsQuery {
    pub order: Option<String>,
}

/// Query string of `GET /api-docs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiDocsQuery {
    pub ui: Option<String>,
}

impl ApiDocsQuery {
    /// The viewer is requested by any non-empty `ui` value.
    pub fn wants_ui(&self) -> bool {
        self.ui.as_deref().is_some_and(|ui| !ui.is_empty())
    }
}
