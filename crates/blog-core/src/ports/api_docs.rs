use async_trait::async_trait;

/// Source of the machine-readable description of the HTTP surface.
#[async_trait]
pub trait ApiDescriptionProvider: Send + Sync {
    /// Fetch the description document, returned verbatim.
    async fn fetch(&self) -> Result<String, DescriptionError>;
}

/// Description provider errors.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("Description request failed: {0}")]
    Request(String),

    #[error("Description provider returned status {0}")]
    Status(u16),

    #[error("Description could not be rendered: {0}")]
    Render(String),
}
