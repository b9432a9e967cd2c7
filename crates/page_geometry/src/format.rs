//! Named page format presets
//!
//! Every preset is stored as a pixel pair in portrait order
//! `(shorter, longer)`. Orientation is applied later by swapping axes.

use serde::{Deserialize, Serialize};

/// Standard page format presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageFormat {
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    /// US Letter
    Letter,
    /// US Legal
    Legal,
    /// ID-1 card (85.6mm x 54mm)
    CreditCard,
}

impl PageFormat {
    /// All presets in table order
    pub const ALL: [PageFormat; 14] = [
        PageFormat::A0,
        PageFormat::A1,
        PageFormat::A2,
        PageFormat::A3,
        PageFormat::A4,
        PageFormat::A5,
        PageFormat::A6,
        PageFormat::A7,
        PageFormat::A8,
        PageFormat::A9,
        PageFormat::A10,
        PageFormat::Letter,
        PageFormat::Legal,
        PageFormat::CreditCard,
    ];

    /// Base pixel pair `(width, height)` in portrait order
    pub const fn dimensions(&self) -> (i64, i64) {
        match self {
            PageFormat::A0 => (4967, 7022),
            PageFormat::A1 => (3508, 4967),
            PageFormat::A2 => (2480, 3508),
            PageFormat::A3 => (1754, 2480),
            PageFormat::A4 => (1240, 1754),
            PageFormat::A5 => (874, 1240),
            PageFormat::A6 => (620, 874),
            PageFormat::A7 => (437, 620),
            PageFormat::A8 => (307, 437),
            PageFormat::A9 => (219, 307),
            PageFormat::A10 => (154, 219),
            PageFormat::Letter => (1276, 1648),
            PageFormat::Legal => (1276, 2102),
            PageFormat::CreditCard => (319, 508),
        }
    }

    /// Lookup key, as accepted by [`PageFormat::from_name`]
    pub const fn key(&self) -> &'static str {
        match self {
            PageFormat::A0 => "a0",
            PageFormat::A1 => "a1",
            PageFormat::A2 => "a2",
            PageFormat::A3 => "a3",
            PageFormat::A4 => "a4",
            PageFormat::A5 => "a5",
            PageFormat::A6 => "a6",
            PageFormat::A7 => "a7",
            PageFormat::A8 => "a8",
            PageFormat::A9 => "a9",
            PageFormat::A10 => "a10",
            PageFormat::Letter => "letter",
            PageFormat::Legal => "legal",
            PageFormat::CreditCard => "credit_card",
        }
    }

    /// Case-insensitive lookup by key
    pub fn from_name(name: &str) -> Option<PageFormat> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.key().eq_ignore_ascii_case(name))
    }

    /// Lookup by key, falling back to A4 for unknown names
    pub fn from_name_or_default(name: &str) -> PageFormat {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::debug!("Unknown page format {:?}, using a4", name);
            PageFormat::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_portrait_ordered() {
        for format in PageFormat::ALL {
            let (width, height) = format.dimensions();
            assert!(width <= height, "{} is not portrait ordered", format.key());
            assert!(width > 0);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(PageFormat::from_name("A4"), Some(PageFormat::A4));
        assert_eq!(PageFormat::from_name("Letter"), Some(PageFormat::Letter));
        assert_eq!(PageFormat::from_name("CREDIT_CARD"), Some(PageFormat::CreditCard));
        assert_eq!(PageFormat::from_name(" a10 "), Some(PageFormat::A10));
    }

    #[test]
    fn test_unknown_format_falls_back_to_a4() {
        assert_eq!(PageFormat::from_name("tabloid"), None);
        assert_eq!(PageFormat::from_name_or_default("tabloid"), PageFormat::A4);
        assert_eq!(PageFormat::from_name_or_default(""), PageFormat::A4);
    }

    #[test]
    fn test_keys_round_trip() {
        for format in PageFormat::ALL {
            assert_eq!(PageFormat::from_name(format.key()), Some(format));
        }
    }
}
