#![forbid(unsafe_code)]

//! Section definitions: what a page is made of.
//!
//! A [`SectionDef`] names one section and says how it animates. Pinned
//! sections carry a scroll-scrubbed [`SectionSequence`] and consume extra
//! scroll range while pinned; reveal sections carry a one-shot
//! [`MountTimeline`] that starts when they enter the viewport.

use vitrine_core::mount::MountTimeline;
use vitrine_core::pinned::Viewport;
use vitrine_core::sequence::SectionSequence;

/// How far down the viewport a reveal section's top must rise before its
/// entrance starts, as a fraction of viewport height.
pub const REVEAL_TRIGGER: f32 = 0.80;

/// How a section animates.
#[derive(Debug, Clone)]
pub enum SectionKind {
    /// Locked in the viewport while scroll scrubs its sequence.
    Pinned {
        /// Scroll-range length as a multiple of viewport height.
        range_factor: f32,
        /// The authored element tracks.
        sequence: SectionSequence,
    },
    /// Plays its entrance once, on first becoming visible.
    Reveal {
        /// The authored entrance.
        timeline: MountTimeline,
    },
}

/// One section of a page, in document order.
#[derive(Debug, Clone)]
pub struct SectionDef {
    /// Stable section identifier.
    pub id: &'static str,
    /// Animation behavior.
    pub kind: SectionKind,
}

impl SectionDef {
    /// A pinned section with the default 130% scroll range.
    #[must_use]
    pub fn pinned(id: &'static str, sequence: SectionSequence) -> Self {
        Self {
            id,
            kind: SectionKind::Pinned {
                range_factor: 1.30,
                sequence,
            },
        }
    }

    /// Override a pinned section's scroll-range factor (builder pattern).
    #[must_use]
    pub fn range_factor(mut self, factor: f32) -> Self {
        if let SectionKind::Pinned { range_factor, .. } = &mut self.kind {
            *range_factor = factor;
        }
        self
    }

    /// A reveal section.
    #[must_use]
    pub fn reveal(id: &'static str, timeline: MountTimeline) -> Self {
        Self {
            id,
            kind: SectionKind::Reveal { timeline },
        }
    }

    /// Total document height this section occupies: its own viewport-high
    /// slot, plus the pin spacer for pinned sections.
    #[must_use]
    pub fn scroll_extent(&self, viewport: Viewport) -> f32 {
        match &self.kind {
            SectionKind::Pinned { range_factor, .. } => {
                viewport.height + range_factor * viewport.height
            }
            SectionKind::Reveal { .. } => viewport.height,
        }
    }
}
