//! Error types for print document emission

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Render configuration error: {0}")]
    Render(#[from] render_config::RenderConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
