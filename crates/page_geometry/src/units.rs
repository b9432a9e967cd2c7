//! Length tokens and their conversion to print pixels
//!
//! Lengths arrive as loosely typed text such as `"100mm"`, `"400px"` or a bare
//! `"100"`. Millimeters are the default unit and are converted to pixels at
//! [`PRINT_DPI`]. Pixel lengths are taken as-is.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Reference resolution for millimeter conversion
pub const PRINT_DPI: f64 = 300.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Largest pixel magnitude a single axis may have
pub const MAX_AXIS_PX: i64 = 1_000_000;

/// Unit tag carried by a length token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    Millimeter,
    Pixel,
    /// No suffix given; treated as millimeters
    #[default]
    Unspecified,
}

impl LengthUnit {
    /// Detect the unit from a trimmed, lower-cased token
    fn detect(token: &str) -> Self {
        if token.ends_with("px") {
            LengthUnit::Pixel
        } else if token.ends_with("mm") {
            LengthUnit::Millimeter
        } else {
            LengthUnit::Unspecified
        }
    }
}

/// A parsed length: finite magnitude plus unit tag
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub magnitude: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const ZERO: Length = Length {
        magnitude: 0.0,
        unit: LengthUnit::Unspecified,
    };

    /// Parse a length token.
    ///
    /// An empty token is zero. Otherwise the token is trimmed and lower-cased,
    /// its unit is read from the suffix and its magnitude from the longest
    /// numeric prefix. Returns `None` when there is no finite numeric prefix
    /// (including a token made only of whitespace).
    pub fn parse(input: &str) -> Option<Length> {
        if input.is_empty() {
            return Some(Length::ZERO);
        }

        let clean = input.trim().to_lowercase();
        let magnitude = leading_number(&clean)?;

        Some(Length {
            magnitude,
            unit: LengthUnit::detect(&clean),
        })
    }

    /// Convert to whole pixels.
    ///
    /// Millimeter (and unit-less) lengths are rounded to the nearest pixel at
    /// [`PRINT_DPI`]; pixel lengths drop their fractional part. Returns `None`
    /// when the result lies beyond [`MAX_AXIS_PX`] in either direction.
    pub fn to_pixels(&self) -> Option<i64> {
        let px = match self.unit {
            LengthUnit::Pixel => self.magnitude.trunc(),
            LengthUnit::Millimeter | LengthUnit::Unspecified => mm_to_px(self.magnitude),
        };
        (px.abs() <= MAX_AXIS_PX as f64).then_some(px as i64)
    }
}

/// Convert millimeters to whole pixels at [`PRINT_DPI`]
pub fn mm_to_px(mm: f64) -> f64 {
    (mm * PRINT_DPI / MM_PER_INCH).round()
}

/// Normalize an optional length token to pixels.
///
/// Missing or empty input is `Some(0)`. `None` means the token carried no
/// usable number, or one too large for a page, and the caller has to fall
/// back.
pub fn to_pixels(input: Option<&str>) -> Option<i64> {
    match input {
        None => Some(0),
        Some(token) => Length::parse(token).and_then(|length| length.to_pixels()),
    }
}

/// Longest numeric prefix of `token`, if it is finite
fn leading_number(token: &str) -> Option<f64> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("numeric prefix pattern is valid")
    });

    let value: f64 = re.find(token)?.as_str().parse().ok()?;
    value.is_finite().then_some(value)
}
