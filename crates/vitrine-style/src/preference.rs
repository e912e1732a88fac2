#![forbid(unsafe_code)]

//! Persisted accent preference: a single JSON document on disk.
//!
//! Loading is the explicit first half of the store's two-step init
//! protocol — it is a plain fallible function so the fallback path is
//! testable without constructing a store. Saving is best-effort: the
//! store logs and swallows failures, because a preference that does not
//! survive the session is a cosmetic regression, never a fatal one.
//!
//! # Failure Modes
//!
//! - Missing file → [`PreferenceError::NotFound`] (expected on first run).
//! - Unreadable file or malformed JSON → `Io` / `Parse`.
//! - Well-formed JSON carrying a value outside the palette →
//!   [`PreferenceError::NotInPalette`]. Callers substitute the default.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::palette::{AccentColor, accent_for};

/// On-disk shape: `{"accent":"#RRGGBB"}`.
#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    accent: String,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors surfaced by preference loading and saving.
#[derive(Debug)]
pub enum PreferenceError {
    /// No preference has been persisted yet.
    NotFound,
    /// I/O error reading or writing the file.
    Io(io::Error),
    /// The file exists but is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// The stored value is not a member of the accent palette.
    NotInPalette(String),
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no persisted preference"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "preference parse error: {e}"),
            Self::NotInPalette(v) => write!(f, "stored accent {v:?} is not in the palette"),
        }
    }
}

impl std::error::Error for PreferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::NotFound | Self::NotInPalette(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Load / store
// ---------------------------------------------------------------------------

/// Read and validate the persisted accent.
///
/// Returns the palette entry on success. Every failure mode is a distinct
/// variant so the caller can decide how loudly to recover; the store
/// treats all of them as "use the default".
pub fn load_preference(path: &Path) -> Result<AccentColor, PreferenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(PreferenceError::NotFound),
        Err(e) => return Err(PreferenceError::Io(e)),
    };
    let file: PreferenceFile =
        serde_json::from_slice(&bytes).map_err(PreferenceError::Parse)?;
    let rgb = Rgb::parse_hex(&file.accent)
        .ok_or_else(|| PreferenceError::NotInPalette(file.accent.clone()))?;
    accent_for(rgb).ok_or(PreferenceError::NotInPalette(file.accent))
}

/// Persist the accent. The caller decides whether failure matters; the
/// store swallows it after a warning.
pub fn store_preference(path: &Path, rgb: Rgb) -> Result<(), PreferenceError> {
    let file = PreferenceFile {
        accent: rgb.to_string(),
    };
    let json = serde_json::to_vec_pretty(&file).map_err(PreferenceError::Parse)?;
    fs::write(path, json).map_err(PreferenceError::Io)
}
