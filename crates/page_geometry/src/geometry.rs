//! Resolved page geometry, orientation and render mode

use serde::{Deserialize, Serialize};

use crate::{PageFormat, MAX_AXIS_PX};

// =============================================================================
// Page Orientation
// =============================================================================

/// Page orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Parse a requested orientation. Anything other than `landscape`
    /// (case-insensitive) is portrait.
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("landscape") {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Apply orientation to dimensions by swapping axes when needed
    pub fn apply(&self, width: i64, height: i64) -> (i64, i64) {
        match self {
            Orientation::Portrait => {
                if width > height {
                    (height, width)
                } else {
                    (width, height)
                }
            }
            Orientation::Landscape => {
                if width < height {
                    (height, width)
                } else {
                    (width, height)
                }
            }
        }
    }

    /// Encoder orientation string
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

// =============================================================================
// Render Mode
// =============================================================================

/// How the content container is sized during capture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Content is clipped to exactly one page of the resolved size
    Label,
    /// Page height is a minimum; content flows over as many pages as it needs
    #[default]
    Flow,
}

impl RenderMode {
    /// Whether the container is clipped to the resolved height
    pub fn clips_content(&self) -> bool {
        matches!(self, RenderMode::Label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Label => "label",
            RenderMode::Flow => "flow",
        }
    }
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Safety padding added to each axis of the encoder page size. Without it the
/// encoder's rounding at page boundaries clips one row/column of pixels.
pub const ENCODER_PADDING_PX: i64 = 2;

/// The resolved page geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    /// Content width in pixels (after orientation, before zoom)
    pub width_px: i64,
    /// Content height in pixels (after orientation, before zoom)
    pub height_px: i64,
    /// Encoder page width (after zoom, padded)
    pub final_width_px: i64,
    /// Encoder page height (after zoom, padded)
    pub final_height_px: i64,
    /// Zoom factor the final size was derived with
    pub zoom: f64,
    pub orientation: Orientation,
    pub render_mode: RenderMode,
    /// Preset the base size came from (None for custom dimensions)
    pub format: Option<PageFormat>,
}

impl PageGeometry {
    /// Encoder page size `[width, height]`
    pub fn final_size(&self) -> [i64; 2] {
        [self.final_width_px, self.final_height_px]
    }

    pub fn is_label(&self) -> bool {
        self.render_mode.clips_content()
    }
}

/// Scale one axis by the zoom factor and pad it for the encoder. `None` when
/// the zoomed axis would exceed [`MAX_AXIS_PX`].
pub(crate) fn zoomed_axis(axis: i64, zoom: f64) -> Option<i64> {
    let scaled = (axis as f64 / zoom).round();
    if !scaled.is_finite() || scaled.abs() > MAX_AXIS_PX as f64 {
        return None;
    }
    (scaled as i64).checked_add(ENCODER_PADDING_PX)
}
