//! Render configuration assembly
//!
//! A [`RenderConfiguration`] bundles everything the external capture and PDF
//! encoding pipeline needs: the resolved page geometry, the capture scale,
//! the margin, the output file name and the page-break rules. It is built once
//! and never modified.

use page_geometry::PageGeometry;
use serde::Serialize;

use crate::{Fidelity, PageBreakRules};

/// File name used when none is given
pub const DEFAULT_FILE_NAME: &str = "download";

/// Margin used when none is given
pub const DEFAULT_MARGIN: f64 = 0.0;

/// The assembled configuration handed to the capture/encode pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfiguration {
    geometry: PageGeometry,
    fidelity: Fidelity,
    scale: f64,
    margin: f64,
    file_name: String,
    page_breaks: PageBreakRules,
}

impl RenderConfiguration {
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    /// Capture pixel density multiplier
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Uniform margin in the encoder's native unit (not converted)
    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn page_breaks(&self) -> &PageBreakRules {
        &self.page_breaks
    }

    /// Pretty JSON view of the configuration
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assemble a render configuration from a resolved geometry and raw inputs.
///
/// Missing or malformed inputs fall back to their defaults; this never fails.
pub fn assemble(
    geometry: PageGeometry,
    fidelity: Option<&str>,
    margin: Option<&str>,
    file_name: Option<&str>,
    break_before: Option<&str>,
    break_after: Option<&str>,
    break_avoid: Option<&str>,
) -> RenderConfiguration {
    let fidelity = Fidelity::parse(fidelity);

    RenderConfiguration {
        geometry,
        fidelity,
        scale: fidelity.scale(),
        margin: parse_margin(margin),
        file_name: file_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string(),
        page_breaks: PageBreakRules::new(break_before, break_after, break_avoid),
    }
}

/// Parse the margin token as a plain number. No unit conversion is applied.
pub fn parse_margin(input: Option<&str>) -> f64 {
    let Some(token) = input.map(str::trim).filter(|token| !token.is_empty()) else {
        return DEFAULT_MARGIN;
    };

    match token.parse::<f64>() {
        Ok(margin) if margin.is_finite() => margin,
        _ => {
            tracing::warn!("Invalid margin {:?}, using {}", token, DEFAULT_MARGIN);
            DEFAULT_MARGIN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_geometry::resolve;

    fn a4() -> PageGeometry {
        resolve("a4", None, "portrait", "1").unwrap()
    }

    #[test]
    fn test_assemble_defaults() {
        let config = assemble(a4(), None, None, None, None, None, None);
        assert_eq!(config.scale(), 1.5);
        assert_eq!(config.fidelity(), Fidelity::Standard);
        assert_eq!(config.margin(), 0.0);
        assert_eq!(config.file_name(), "download");
        assert!(config.page_breaks().is_empty());
        assert_eq!(config.geometry(), &a4());
    }

    #[test]
    fn test_assemble_fidelity() {
        let config = assemble(a4(), Some("high"), None, None, None, None, None);
        assert_eq!(config.scale(), 2.0);

        let config = assemble(a4(), Some("best"), None, None, None, None, None);
        assert_eq!(config.scale(), 1.5);
    }

    #[test]
    fn test_assemble_passes_margin_through() {
        let config = assemble(a4(), None, Some("10"), None, None, None, None);
        assert_eq!(config.margin(), 10.0);

        let config = assemble(a4(), None, Some("2.5"), None, None, None, None);
        assert_eq!(config.margin(), 2.5);
    }

    #[test]
    fn test_parse_margin_defaults() {
        assert_eq!(parse_margin(None), 0.0);
        assert_eq!(parse_margin(Some("")), 0.0);
        assert_eq!(parse_margin(Some("10mm")), 0.0);
        assert_eq!(parse_margin(Some("NaN")), 0.0);
        assert_eq!(parse_margin(Some(" 4 ")), 4.0);
    }

    #[test]
    fn test_blank_file_name_defaults() {
        let config = assemble(a4(), None, None, Some("  "), None, None, None);
        assert_eq!(config.file_name(), "download");

        let config = assemble(a4(), None, None, Some("invoice.pdf"), None, None, None);
        assert_eq!(config.file_name(), "invoice.pdf");
    }

    #[test]
    fn test_to_json_uses_camel_case() {
        let config = assemble(a4(), Some("low"), None, Some("label"), Some("h1"), None, None);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"fileName\": \"label\""));
        assert!(json.contains("\"pageBreaks\""));
        assert!(json.contains("\"finalWidthPx\": 1242"));
        assert!(json.contains("\"renderMode\": \"flow\""));
    }
}
