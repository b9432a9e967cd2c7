//! Print request
//!
//! The loosely typed input record. Every field is optional text; defaults are
//! applied in one place, [`PrintRequest::resolve`].

use page_geometry::resolve;
use serde::{Deserialize, Serialize};

use crate::{assemble, RenderConfiguration, Result};

/// Markup used when the request carries no content
pub const DEFAULT_CONTENT: &str = "No HTML set.";

/// Page format used when none is given
pub const DEFAULT_FORMAT: &str = "a4";

/// Zoom used when none is given
pub const DEFAULT_ZOOM_INPUT: &str = "1";

/// Orientation used when none is given
pub const DEFAULT_ORIENTATION: &str = "portrait";

/// Raw print parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintRequest {
    /// Markup to print (opaque)
    pub content: Option<String>,
    pub file_name: Option<String>,
    /// Preset key, e.g. `a4`, `letter`, `credit_card`
    pub format: Option<String>,
    pub zoom: Option<String>,
    /// `portrait` or `landscape`
    pub orientation: Option<String>,
    /// Uniform margin in the encoder's unit
    pub margin: Option<String>,
    pub break_before: Option<String>,
    pub break_after: Option<String>,
    pub break_avoid: Option<String>,
    /// `low`, `standard` or `high`
    pub fidelity: Option<String>,
    /// e.g. `100x40`, `100mm,40mm`, `400px x 300px`
    pub custom_dimensions: Option<String>,
}

impl PrintRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a request from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_zoom(mut self, zoom: impl Into<String>) -> Self {
        self.zoom = Some(zoom.into());
        self
    }

    pub fn with_orientation(mut self, orientation: impl Into<String>) -> Self {
        self.orientation = Some(orientation.into());
        self
    }

    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = Some(margin.into());
        self
    }

    pub fn with_break_before(mut self, selectors: impl Into<String>) -> Self {
        self.break_before = Some(selectors.into());
        self
    }

    pub fn with_break_after(mut self, selectors: impl Into<String>) -> Self {
        self.break_after = Some(selectors.into());
        self
    }

    pub fn with_break_avoid(mut self, selectors: impl Into<String>) -> Self {
        self.break_avoid = Some(selectors.into());
        self
    }

    pub fn with_fidelity(mut self, fidelity: impl Into<String>) -> Self {
        self.fidelity = Some(fidelity.into());
        self
    }

    pub fn with_custom_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.custom_dimensions = Some(dimensions.into());
        self
    }

    /// Overlay the fields set in `overrides` on top of this request
    pub fn merge(self, overrides: PrintRequest) -> Self {
        Self {
            content: overrides.content.or(self.content),
            file_name: overrides.file_name.or(self.file_name),
            format: overrides.format.or(self.format),
            zoom: overrides.zoom.or(self.zoom),
            orientation: overrides.orientation.or(self.orientation),
            margin: overrides.margin.or(self.margin),
            break_before: overrides.break_before.or(self.break_before),
            break_after: overrides.break_after.or(self.break_after),
            break_avoid: overrides.break_avoid.or(self.break_avoid),
            fidelity: overrides.fidelity.or(self.fidelity),
            custom_dimensions: overrides.custom_dimensions.or(self.custom_dimensions),
        }
    }

    /// Content markup, or the placeholder when none was given
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or(DEFAULT_CONTENT)
    }

    /// Resolve the page geometry and assemble the render configuration
    pub fn resolve(&self) -> Result<RenderConfiguration> {
        let geometry = resolve(
            self.format.as_deref().unwrap_or(DEFAULT_FORMAT),
            self.custom_dimensions.as_deref(),
            self.orientation.as_deref().unwrap_or(DEFAULT_ORIENTATION),
            self.zoom.as_deref().unwrap_or(DEFAULT_ZOOM_INPUT),
        )?;

        Ok(assemble(
            geometry,
            self.fidelity.as_deref(),
            self.margin.as_deref(),
            self.file_name.as_deref(),
            self.break_before.as_deref(),
            self.break_after.as_deref(),
            self.break_avoid.as_deref(),
        ))
    }
}
