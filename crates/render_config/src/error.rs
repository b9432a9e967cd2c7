//! Error types for render configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderConfigError {
    #[error("Page configuration error: {0}")]
    Configuration(#[from] page_geometry::ConfigurationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderConfigError>;
