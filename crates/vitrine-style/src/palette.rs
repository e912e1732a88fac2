#![forbid(unsafe_code)]

//! The fixed accent palette.
//!
//! Eight named accents; the first entry is the fallback whenever no valid
//! preference exists. Everything that mutates the theme validates against
//! this table — an accent outside it never becomes the selection.

use crate::color::Rgb;

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    /// Display name shown in the picker.
    pub name: &'static str,
    /// The accent value.
    pub rgb: Rgb,
}

/// The selectable accents, in picker order.
pub const ACCENTS: [AccentColor; 8] = [
    AccentColor {
        name: "Coral",
        rgb: Rgb::new(0xFF, 0x4D, 0x2E),
    },
    AccentColor {
        name: "Blue",
        rgb: Rgb::new(0x3B, 0x82, 0xF6),
    },
    AccentColor {
        name: "Green",
        rgb: Rgb::new(0x10, 0xB9, 0x81),
    },
    AccentColor {
        name: "Purple",
        rgb: Rgb::new(0x8B, 0x5C, 0xF6),
    },
    AccentColor {
        name: "Pink",
        rgb: Rgb::new(0xEC, 0x48, 0x99),
    },
    AccentColor {
        name: "Yellow",
        rgb: Rgb::new(0xF5, 0x9E, 0x0B),
    },
    AccentColor {
        name: "Cyan",
        rgb: Rgb::new(0x06, 0xB6, 0xD4),
    },
    AccentColor {
        name: "Orange",
        rgb: Rgb::new(0xF9, 0x73, 0x16),
    },
];

/// The fallback accent: the first palette entry (Coral).
#[must_use]
pub const fn default_accent() -> AccentColor {
    ACCENTS[0]
}

/// Look up the palette entry with this value, if any.
#[must_use]
pub fn accent_for(rgb: Rgb) -> Option<AccentColor> {
    ACCENTS.iter().copied().find(|a| a.rgb == rgb)
}

/// Whether this value is a palette member.
#[must_use]
pub fn is_palette_member(rgb: Rgb) -> bool {
    accent_for(rgb).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_coral() {
        let d = default_accent();
        assert_eq!(d.name, "Coral");
        assert_eq!(d.rgb.to_string(), "#FF4D2E");
    }

    #[test]
    fn palette_values_are_distinct() {
        for (i, a) in ACCENTS.iter().enumerate() {
            for b in &ACCENTS[i + 1..] {
                assert_ne!(a.rgb, b.rgb, "{} and {} collide", a.name, b.name);
            }
        }
    }

    #[test]
    fn every_member_resolves() {
        for a in ACCENTS {
            assert_eq!(accent_for(a.rgb), Some(a));
            assert!(is_palette_member(a.rgb));
        }
    }

    #[test]
    fn foreign_value_is_rejected() {
        assert!(!is_palette_member(Rgb::new(1, 2, 3)));
        assert_eq!(accent_for(Rgb::new(0, 0, 0)), None);
    }
}
