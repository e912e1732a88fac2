#![forbid(unsafe_code)]

//! The theme-preference store: single source of truth for the accent.
//!
//! One injectable object, passed by reference to everything that renders
//! accented elements. Any consumer may read; the only mutation path is
//! [`ThemeStore::set_accent`]. The published snapshot is an arc-swapped
//! [`ThemeTokens`] pair (base accent + derived hover tone) — the analog
//! of the original document-level custom properties — so consumers
//! re-style consistently without threading the value through every call.
//!
//! # Invariants
//!
//! 1. The published accent is always a palette member.
//! 2. `set_accent` with a non-palette value keeps the prior selection and
//!    surfaces nothing to the caller (cosmetic preference, logged only).
//! 3. Initialization resolves synchronously: the first read after
//!    [`ThemeStore::open`] already reflects the persisted preference or
//!    the default — no wrong-color frame.
//!
//! # Failure Modes
//!
//! - Persistence read/write failures are logged and swallowed; the
//!   preference lives in memory for the session.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;

use arc_swap::ArcSwap;

use crate::color::{HOVER_DARKEN, Rgb};
use crate::palette::{AccentColor, accent_for, default_accent};
use crate::preference::{PreferenceError, load_preference, store_preference};

/// The document-level style tokens every consumer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    /// The selected accent.
    pub accent: Rgb,
    /// Darkened accent for hover/emphasis. Derived, never persisted.
    pub accent_hover: Rgb,
}

impl ThemeTokens {
    /// Tokens for an accent, with the hover tone recomputed.
    #[must_use]
    pub fn for_accent(accent: Rgb) -> Self {
        Self {
            accent,
            accent_hover: accent.darken(HOVER_DARKEN),
        }
    }
}

type Subscriber = Box<dyn Fn(ThemeTokens) + Send + Sync>;

/// Single source of truth for the active accent color.
pub struct ThemeStore {
    tokens: ArcSwap<ThemeTokens>,
    path: Option<PathBuf>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("tokens", &**self.tokens.load())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Open a store backed by the given preference file.
    ///
    /// Loads synchronously; any load failure falls back to the default
    /// accent. `NotFound` is the normal first-run case and logged at
    /// debug; everything else warns.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let accent = match load_preference(&path) {
            Ok(accent) => {
                tracing::debug!(accent = %accent.rgb, "loaded persisted accent");
                accent
            }
            Err(PreferenceError::NotFound) => {
                tracing::debug!("no persisted accent; using default");
                default_accent()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load accent preference; using default");
                default_accent()
            }
        };
        Self {
            tokens: ArcSwap::from_pointee(ThemeTokens::for_accent(accent.rgb)),
            path: Some(path),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// A store with no persistence backing. The preference lives for the
    /// session only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            tokens: ArcSwap::from_pointee(ThemeTokens::for_accent(default_accent().rgb)),
            path: None,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// The selected accent. Never fails.
    #[must_use]
    pub fn accent(&self) -> AccentColor {
        accent_for(self.tokens.load().accent).unwrap_or_else(default_accent)
    }

    /// The current token snapshot.
    #[must_use]
    pub fn tokens(&self) -> ThemeTokens {
        **self.tokens.load()
    }

    /// Select an accent.
    ///
    /// Values outside the palette are ignored (prior selection kept).
    /// On success the snapshot is swapped, the preference is persisted
    /// best-effort, and subscribers are notified with the new tokens.
    pub fn set_accent(&self, rgb: Rgb) {
        if accent_for(rgb).is_none() {
            tracing::warn!(value = %rgb, "rejected accent outside the palette");
            return;
        }
        let tokens = ThemeTokens::for_accent(rgb);
        self.tokens.store(Arc::new(tokens));

        if let Some(path) = &self.path {
            if let Err(e) = store_preference(path, rgb) {
                tracing::warn!(error = %e, "failed to persist accent; keeping in-memory value");
            }
        }

        let subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        for notify in subscribers.iter() {
            notify(tokens);
        }
    }

    /// Register a change callback, invoked on every successful
    /// `set_accent` with the new tokens.
    pub fn subscribe(&self, callback: impl Fn(ThemeTokens) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ACCENTS;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn set_then_get_round_trips_every_palette_entry() {
        let store = ThemeStore::in_memory();
        for accent in ACCENTS {
            store.set_accent(accent.rgb);
            assert_eq!(store.accent(), accent);
        }
    }

    #[test]
    fn default_load_uses_first_palette_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::open(dir.path().join("accent.json"));
        assert_eq!(store.accent(), default_accent());
    }

    #[test]
    fn persisted_selection_survives_reinitialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accent.json");

        let store = ThemeStore::open(&path);
        store.set_accent(ACCENTS[2].rgb);
        assert_eq!(store.accent(), ACCENTS[2]);
        drop(store);

        // A fresh session initialized from the same storage.
        let fresh = ThemeStore::open(&path);
        assert_eq!(fresh.accent(), ACCENTS[2]);
    }

    #[test]
    fn invalid_persisted_value_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accent.json");
        std::fs::write(&path, br##"{"accent":"#ABCDEF"}"##).unwrap();

        let store = ThemeStore::open(&path);
        assert_eq!(store.accent(), default_accent());
    }

    #[test]
    fn corrupt_persisted_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accent.json");
        std::fs::write(&path, b"\x00\x01garbage").unwrap();

        let store = ThemeStore::open(&path);
        assert_eq!(store.accent(), default_accent());
    }

    #[test]
    fn non_palette_set_keeps_prior_value() {
        let store = ThemeStore::in_memory();
        store.set_accent(ACCENTS[1].rgb);
        store.set_accent(Rgb::new(1, 2, 3));
        assert_eq!(store.accent(), ACCENTS[1]);
    }

    #[test]
    fn write_failure_keeps_in_memory_value() {
        // Point persistence at a path whose parent does not exist.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("accent.json");
        let store = ThemeStore::open(path);

        store.set_accent(ACCENTS[3].rgb);
        assert_eq!(store.accent(), ACCENTS[3]);
    }

    #[test]
    fn hover_tone_recomputed_on_every_change() {
        let store = ThemeStore::in_memory();
        for accent in ACCENTS {
            store.set_accent(accent.rgb);
            let tokens = store.tokens();
            assert_eq!(tokens.accent_hover, accent.rgb.darken(HOVER_DARKEN));
        }
    }

    #[test]
    fn subscribers_are_notified_with_new_tokens() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let store = ThemeStore::in_memory();
        let expected = ThemeTokens::for_accent(ACCENTS[4].rgb);
        store.subscribe(move |tokens| {
            assert_eq!(tokens, expected);
            CALLS.fetch_add(1, Ordering::SeqCst);
        });

        store.set_accent(ACCENTS[4].rgb);
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejected_set_does_not_notify() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let store = ThemeStore::in_memory();
        store.subscribe(|_| {
            CALLS.fetch_add(1, Ordering::SeqCst);
        });
        store.set_accent(Rgb::new(9, 9, 9));
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn debug_format_includes_tokens() {
        let store = ThemeStore::in_memory();
        let dbg = format!("{store:?}");
        assert!(dbg.contains("ThemeStore"));
        assert!(dbg.contains("tokens"));
    }
}
