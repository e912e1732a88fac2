#![forbid(unsafe_code)]

//! Scroll-synchronized animation sequencing for Vitrine.
//!
//! # Role in Vitrine
//! `vitrine-core` is the engine behind the showcase's pinned sections:
//! it turns scroll position into per-element visual state without any
//! knowledge of routes, content, or theming.
//!
//! # This crate provides
//! - [`VisualState`] and easing curves as the interpolation vocabulary.
//! - [`SectionSequence`] / [`ElementTrack`]: a section's entrance, hold,
//!   and exit expressed as a pure function of progress.
//! - [`PinnedTimeline`]: the per-section trigger state machine that pins
//!   a section while its scroll range drives that progress.
//! - [`Sequencer`]: the per-page registry that fans out scroll samples
//!   and is torn down wholesale on navigation.
//! - [`MountTimeline`]: the time-driven entrance used by sections that
//!   animate once on appearance rather than scrubbing with scroll.
//!
//! # How it fits in the system
//! `vitrine` (the app shell) authors sequences from section definitions,
//! registers them here, and feeds scroll and frame ticks in; the sampled
//! states are what a renderer applies each frame.

/// Easing curves.
pub mod easing;
/// Time-driven mount timelines.
pub mod mount;
/// Pinned triggers and the per-page sequencer.
pub mod pinned;
/// Progress-driven section sequences.
pub mod sequence;
/// Per-element visual state.
pub mod visual;

pub use easing::{EasingFn, ease_in_quad, ease_linear, ease_out_cubic};
pub use mount::{MountTimeline, MountTrack};
pub use pinned::{PinState, PinnedTimeline, RegisteredSection, SectionLayout, Sequencer, Viewport};
pub use sequence::{ENTRANCE_END, EXIT_START, ElementTrack, Phase, SectionSequence};
pub use visual::VisualState;
