//! Remote description provider backed by an HTTP export endpoint.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use blog_core::ports::{ApiDescriptionProvider, DescriptionError};

/// Placeholder in the export URL replaced by the API identifier.
pub const API_ID_PLACEHOLDER: &str = "{api_id}";

/// Fetches the description from an export URL on every call.
pub struct HttpDescriptionProvider {
    url: String,
    client: reqwest::Client,
}

impl HttpDescriptionProvider {
    /// `url_template` may contain `{api_id}`, substituted with `api_id`.
    pub fn new(url_template: &str, api_id: &str) -> Self {
        Self {
            url: url_template.replace(API_ID_PLACEHOLDER, api_id),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ApiDescriptionProvider for HttpDescriptionProvider {
    async fn fetch(&self) -> Result<String, DescriptionError> {
        tracing::debug!(url = %self.url, "Fetching API description");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DescriptionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DescriptionError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| DescriptionError::Request(e.to_string()))
    }
}
