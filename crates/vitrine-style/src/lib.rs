#![forbid(unsafe_code)]

//! Accent palette and theme-preference store for Vitrine.
//!
//! # Role in Vitrine
//! `vitrine-style` is the shared vocabulary for the showcase's single
//! user-facing visual preference: the accent color. Sections and pages
//! read it; the color picker is the only writer.
//!
//! # This crate provides
//! - [`Rgb`] with hex parsing and the hover-tone derivation.
//! - The fixed eight-entry [`ACCENTS`] palette with its default.
//! - [`ThemeStore`]: injectable single source of truth with arc-swapped
//!   [`ThemeTokens`] snapshots and change subscriptions.
//! - Explicit [`load_preference`]/[`store_preference`] persistence so the
//!   fallback path is testable on its own.
//!
//! # How it fits in the system
//! The app shell opens one store before first render and passes it by
//! reference to every section; nothing else in the workspace knows where
//! the preference lives on disk.

/// RGB color type and hover derivation.
pub mod color;
/// The fixed accent palette.
pub mod palette;
/// Persisted preference load/store.
pub mod preference;
/// The theme-preference store.
pub mod store;

pub use color::{HOVER_DARKEN, Rgb};
pub use palette::{ACCENTS, AccentColor, accent_for, default_accent, is_palette_member};
pub use preference::{PreferenceError, load_preference, store_preference};
pub use store::{ThemeStore, ThemeTokens};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_tokens_track_the_palette() {
        for accent in ACCENTS {
            let tokens = ThemeTokens::for_accent(accent.rgb);
            assert_eq!(tokens.accent, accent.rgb);
            assert_eq!(tokens.accent_hover, accent.rgb.darken(HOVER_DARKEN));
        }
    }

    #[test]
    fn palette_hex_round_trips_through_parse() {
        for accent in ACCENTS {
            let parsed = Rgb::parse_hex(&accent.rgb.to_string());
            assert_eq!(parsed, Some(accent.rgb));
        }
    }
}
