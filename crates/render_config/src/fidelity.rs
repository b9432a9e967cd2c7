//! Capture fidelity levels

use serde::{Deserialize, Serialize};

/// Named capture-density tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fidelity {
    Low,
    #[default]
    Standard,
    High,
}

impl Fidelity {
    /// Parse a fidelity level. Unknown or missing levels are `Standard`.
    pub fn parse(input: Option<&str>) -> Self {
        let Some(level) = input.map(str::trim).filter(|level| !level.is_empty()) else {
            return Fidelity::default();
        };

        match level.to_ascii_lowercase().as_str() {
            "low" => Fidelity::Low,
            "standard" => Fidelity::Standard,
            "high" => Fidelity::High,
            _ => {
                tracing::debug!("Unknown fidelity {:?}, using standard", level);
                Fidelity::default()
            }
        }
    }

    /// Pixel density multiplier for the capture engine
    pub fn scale(&self) -> f64 {
        match self {
            Fidelity::Low => 1.0,
            Fidelity::Standard => 1.5,
            Fidelity::High => 2.0,
        }
    }
}
