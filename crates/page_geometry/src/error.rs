//! Error types for page geometry resolution

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Resolved page has no area: {width}x{height}px")]
    EmptyPage { width: i64, height: i64 },

    #[error("Resolved page exceeds {max}px on an axis (zoom {zoom})")]
    PageTooLarge { max: i64, zoom: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
