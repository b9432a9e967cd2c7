//! html2pdf encoder options
//!
//! The external pipeline is driven by a single options object: page-break
//! rules for the paginator, capture settings for html2canvas and page setup
//! for jsPDF. This module builds that object from a [`RenderConfiguration`]
//! and serializes it with the exact key names the pipeline expects.

use serde::Serialize;

use crate::RenderConfiguration;

/// Extra layout width given to the capture window beyond the content width
pub const CAPTURE_WINDOW_MARGIN_PX: i64 = 100;

/// Options object consumed by html2pdf
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncoderOptions {
    pub pagebreak: PageBreakOptions,
    pub margin: f64,
    pub filename: String,
    pub html2canvas: CaptureOptions,
    #[serde(rename = "jsPDF")]
    pub js_pdf: PdfPageOptions,
}

/// Paginator settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBreakOptions {
    pub mode: Vec<&'static str>,
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub avoid: Vec<String>,
}

/// html2canvas capture settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub scale: f64,
    pub scroll_y: i64,
    pub window_width: i64,
    pub width: i64,
    /// Fixed capture height, only set for labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

/// jsPDF page setup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfPageOptions {
    pub unit: &'static str,
    pub orientation: &'static str,
    pub format: [i64; 2],
    pub hotfixes: Vec<&'static str>,
}

impl EncoderOptions {
    pub fn from_config(config: &RenderConfiguration) -> Self {
        let geometry = config.geometry();
        let breaks = config.page_breaks();

        Self {
            pagebreak: PageBreakOptions {
                mode: vec!["css"],
                before: breaks.before.clone(),
                after: breaks.after.clone(),
                avoid: breaks.avoid.clone(),
            },
            margin: config.margin(),
            filename: config.file_name().to_string(),
            html2canvas: CaptureOptions {
                use_cors: true,
                scale: config.scale(),
                scroll_y: 0,
                window_width: geometry.width_px.saturating_add(CAPTURE_WINDOW_MARGIN_PX),
                width: geometry.width_px,
                height: geometry.is_label().then_some(geometry.height_px),
            },
            js_pdf: PdfPageOptions {
                unit: "px",
                orientation: geometry.orientation.as_str(),
                format: geometry.final_size(),
                hotfixes: vec!["px_scaling"],
            },
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&RenderConfiguration> for EncoderOptions {
    fn from(config: &RenderConfiguration) -> Self {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble;
    use page_geometry::resolve;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_flow_options_json() {
        let geometry = resolve("a4", None, "portrait", "1").unwrap();
        let config = assemble(geometry, None, None, None, Some(".chapter"), None, Some("table"));
        let options = EncoderOptions::from_config(&config);

        let value: serde_json::Value = serde_json::from_str(&options.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "pagebreak": {
                    "mode": ["css"],
                    "before": [".chapter"],
                    "after": [],
                    "avoid": ["table"]
                },
                "margin": 0.0,
                "filename": "download",
                "html2canvas": {
                    "useCORS": true,
                    "scale": 1.5,
                    "scrollY": 0,
                    "windowWidth": 1340,
                    "width": 1240
                },
                "jsPDF": {
                    "unit": "px",
                    "orientation": "portrait",
                    "format": [1242, 1756],
                    "hotfixes": ["px_scaling"]
                }
            })
        );
    }

    #[test]
    fn test_label_options_fix_capture_height() {
        let geometry = resolve("a4", Some("100x40"), "landscape", "2").unwrap();
        let config = assemble(geometry, Some("high"), Some("5"), Some("label"), None, None, None);
        let options = EncoderOptions::from(&config);

        assert_eq!(options.html2canvas.width, 1181);
        assert_eq!(options.html2canvas.height, Some(472));
        assert_eq!(options.html2canvas.window_width, 1281);
        assert_eq!(options.html2canvas.scale, 2.0);
        assert_eq!(options.js_pdf.orientation, "landscape");
        assert_eq!(options.js_pdf.format, [593, 238]);
        assert_eq!(options.margin, 5.0);
        assert_eq!(options.filename, "label");

        let json = options.to_json().unwrap();
        assert!(json.contains("\"height\":472"));
    }

    #[test]
    fn test_window_width_saturates() {
        let mut geometry = resolve("a4", None, "portrait", "1").unwrap();
        geometry.width_px = i64::MAX;
        let config = assemble(geometry, None, None, None, None, None, None);

        assert_eq!(EncoderOptions::from_config(&config).html2canvas.window_width, i64::MAX);
    }
}
