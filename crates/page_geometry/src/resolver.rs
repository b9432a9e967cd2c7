//! Page geometry resolution
//!
//! Resolution runs in a fixed order:
//! 1. custom dimensions, if they parse, win over the named format
//! 2. the base pair is swapped to match the requested orientation
//! 3. the final encoder size is the zoomed pair plus [`ENCODER_PADDING_PX`]
//!
//! Successfully parsed custom dimensions also switch the render mode to
//! [`RenderMode::Label`].
//!
//! [`ENCODER_PADDING_PX`]: crate::ENCODER_PADDING_PX

use crate::geometry::zoomed_axis;
use crate::{
    to_pixels, ConfigurationError, Orientation, PageFormat, PageGeometry, RenderMode, Result,
    MAX_AXIS_PX,
};

/// Default zoom factor
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Where the base page size comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBase {
    /// A named preset
    Format(PageFormat),
    /// Caller-supplied pixel pair, in caller axis order
    Custom { width: i64, height: i64 },
}

impl PageBase {
    /// Pick custom dimensions when they parse, the named format otherwise
    pub fn select(format: &str, custom_dimensions: Option<&str>) -> Self {
        match custom_dimensions.and_then(parse_custom_dimensions) {
            Some((width, height)) => PageBase::Custom { width, height },
            None => PageBase::Format(PageFormat::from_name_or_default(format)),
        }
    }

    /// Base pixel pair before orientation
    pub fn dimensions(&self) -> (i64, i64) {
        match self {
            PageBase::Format(format) => format.dimensions(),
            PageBase::Custom { width, height } => (*width, *height),
        }
    }

    /// Custom sizes render as labels, presets as flowing documents
    pub fn render_mode(&self) -> RenderMode {
        match self {
            PageBase::Format(_) => RenderMode::Flow,
            PageBase::Custom { .. } => RenderMode::Label,
        }
    }

    fn format(&self) -> Option<PageFormat> {
        match self {
            PageBase::Format(format) => Some(*format),
            PageBase::Custom { .. } => None,
        }
    }
}

/// Parse a custom dimensions token such as `"100x40"`, `"100mm,40mm"` or
/// `"400px x 300px"` into a pixel pair.
///
/// Returns `None` unless at least two tokens are present and the first two
/// both resolve to numbers. Extra tokens are ignored.
pub fn parse_custom_dimensions(input: &str) -> Option<(i64, i64)> {
    if input.is_empty() {
        return None;
    }

    let tokens = split_dimension_tokens(input);
    if tokens.len() < 2 {
        tracing::debug!("Ignoring custom dimensions {:?}: need two values", input);
        return None;
    }

    match (to_pixels(Some(tokens[0])), to_pixels(Some(tokens[1]))) {
        (Some(width), Some(height)) => Some((width, height)),
        _ => {
            tracing::debug!("Ignoring custom dimensions {:?}: non-numeric axis", input);
            None
        }
    }
}

/// Split on commas and on `x`/`X` separators. An `x` right after a `p` is the
/// end of a `px` suffix and stays in its token.
fn split_dimension_tokens(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut prev = None;

    for (idx, ch) in input.char_indices() {
        let is_separator = match ch {
            ',' => true,
            'x' | 'X' => !matches!(prev, Some('p' | 'P')),
            _ => false,
        };
        if is_separator {
            tokens.push(&input[start..idx]);
            start = idx + ch.len_utf8();
        }
        prev = Some(ch);
    }
    tokens.push(&input[start..]);

    tokens
}

/// Parse a zoom factor. Non-numeric, non-finite and non-positive values fall
/// back to [`DEFAULT_ZOOM`].
pub fn parse_zoom(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(zoom) if zoom.is_finite() && zoom > 0.0 => zoom,
        _ => {
            tracing::warn!("Invalid zoom {:?}, using {}", input, DEFAULT_ZOOM);
            DEFAULT_ZOOM
        }
    }
}

/// Resolve textual print parameters into a page geometry
pub fn resolve(
    format: &str,
    custom_dimensions: Option<&str>,
    orientation: &str,
    zoom: &str,
) -> Result<PageGeometry> {
    resolve_with(
        PageBase::select(format, custom_dimensions),
        Orientation::parse(orientation),
        parse_zoom(zoom),
    )
}

/// Resolve an already selected base size.
///
/// `zoom` must be finite and positive; use [`parse_zoom`] for user input.
/// Either axis, before or after zoom, may be at most [`MAX_AXIS_PX`].
pub fn resolve_with(base: PageBase, orientation: Orientation, zoom: f64) -> Result<PageGeometry> {
    let (base_width, base_height) = base.dimensions();
    let (width, height) = orientation.apply(base_width, base_height);

    if width <= 0 || height <= 0 {
        return Err(ConfigurationError::EmptyPage { width, height });
    }

    let too_large = ConfigurationError::PageTooLarge {
        max: MAX_AXIS_PX,
        zoom,
    };
    if width > MAX_AXIS_PX || height > MAX_AXIS_PX {
        return Err(too_large);
    }
    let (Some(final_width), Some(final_height)) =
        (zoomed_axis(width, zoom), zoomed_axis(height, zoom))
    else {
        return Err(too_large);
    };

    let geometry = PageGeometry {
        width_px: width,
        height_px: height,
        final_width_px: final_width,
        final_height_px: final_height,
        zoom,
        orientation,
        render_mode: base.render_mode(),
        format: base.format(),
    };

    tracing::debug!(
        "Resolved {} page {}x{}px (encoder {}x{}px, {})",
        geometry.orientation.as_str(),
        geometry.width_px,
        geometry.height_px,
        geometry.final_width_px,
        geometry.final_height_px,
        geometry.render_mode.as_str()
    );

    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dimension_tokens() {
        assert_eq!(split_dimension_tokens("100x40"), vec!["100", "40"]);
        assert_eq!(split_dimension_tokens("100X40"), vec!["100", "40"]);
        assert_eq!(split_dimension_tokens("100mm,40mm"), vec!["100mm", "40mm"]);
        assert_eq!(split_dimension_tokens("400px x 300px"), vec!["400px ", " 300px"]);
        assert_eq!(split_dimension_tokens("400pxx300px"), vec!["400px", "300px"]);
        assert_eq!(split_dimension_tokens("100"), vec!["100"]);
    }

    #[test]
    fn test_parse_custom_dimensions() {
        assert_eq!(parse_custom_dimensions("100x40"), Some((1181, 472)));
        assert_eq!(parse_custom_dimensions("100mm,40mm"), Some((1181, 472)));
        assert_eq!(parse_custom_dimensions("400px x 300px"), Some((400, 300)));
        assert_eq!(parse_custom_dimensions("100mm x 300px"), Some((1181, 300)));
        assert_eq!(parse_custom_dimensions("10,20,30"), Some((118, 236)));
    }

    #[test]
    fn test_invalid_custom_dimensions_are_discarded() {
        assert_eq!(parse_custom_dimensions(""), None);
        assert_eq!(parse_custom_dimensions("100"), None);
        assert_eq!(parse_custom_dimensions("abc,def"), None);
        assert_eq!(parse_custom_dimensions("100,abc"), None);
        assert_eq!(parse_custom_dimensions("abc,100"), None);
    }

    #[test]
    fn test_parse_zoom() {
        assert_eq!(parse_zoom("1"), 1.0);
        assert_eq!(parse_zoom(" 2.5 "), 2.5);
        assert_eq!(parse_zoom("0"), DEFAULT_ZOOM);
        assert_eq!(parse_zoom("-2"), DEFAULT_ZOOM);
        assert_eq!(parse_zoom("abc"), DEFAULT_ZOOM);
        assert_eq!(parse_zoom(""), DEFAULT_ZOOM);
        assert_eq!(parse_zoom("inf"), DEFAULT_ZOOM);
        assert_eq!(parse_zoom("NaN"), DEFAULT_ZOOM);
    }

    #[test]
    fn test_page_base_selection() {
        assert_eq!(
            PageBase::select("letter", None),
            PageBase::Format(PageFormat::Letter)
        );
        assert_eq!(
            PageBase::select("letter", Some("abc,def")),
            PageBase::Format(PageFormat::Letter)
        );
        assert_eq!(
            PageBase::select("letter", Some("100x40")),
            PageBase::Custom { width: 1181, height: 472 }
        );
        assert_eq!(PageBase::select("nope", None), PageBase::Format(PageFormat::A4));
    }

    #[test]
    fn test_resolve_a4_portrait() {
        let geometry = resolve("a4", None, "portrait", "1").unwrap();
        assert_eq!((geometry.width_px, geometry.height_px), (1240, 1754));
        assert_eq!(geometry.final_size(), [1242, 1756]);
        assert_eq!(geometry.render_mode, RenderMode::Flow);
        assert_eq!(geometry.format, Some(PageFormat::A4));
    }

    #[test]
    fn test_resolve_custom_label_swaps_for_portrait() {
        let geometry = resolve("a4", Some("100x40"), "portrait", "1").unwrap();
        assert_eq!((geometry.width_px, geometry.height_px), (472, 1181));
        assert_eq!(geometry.render_mode, RenderMode::Label);
        assert_eq!(geometry.format, None);

        let geometry = resolve("a4", Some("100x40"), "landscape", "1").unwrap();
        assert_eq!((geometry.width_px, geometry.height_px), (1181, 472));
    }

    #[test]
    fn test_resolve_rejects_empty_page() {
        let err = resolve("a4", Some("0,100"), "portrait", "1").unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyPage { width: 0, height: 1181 });

        let err = resolve("a4", Some("-10px,100px"), "landscape", "1").unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyPage { width: 100, height: -10 });
    }

    #[test]
    fn test_oversized_custom_dimensions_fall_back() {
        let geometry = resolve("letter", Some("1e30px x 10px"), "portrait", "1").unwrap();
        assert_eq!(geometry.format, Some(PageFormat::Letter));
        assert_eq!(geometry.render_mode, RenderMode::Flow);
        assert_eq!(geometry.final_size(), [1278, 1650]);
    }

    #[test]
    fn test_resolve_rejects_page_too_large() {
        let err = resolve("a4", None, "portrait", "1e-300").unwrap_err();
        assert_eq!(err, ConfigurationError::PageTooLarge { max: MAX_AXIS_PX, zoom: 1e-300 });

        let base = PageBase::Custom { width: i64::MAX, height: 10 };
        let err = resolve_with(base, Orientation::Landscape, 1.0).unwrap_err();
        assert!(matches!(err, ConfigurationError::PageTooLarge { .. }));
    }
}
