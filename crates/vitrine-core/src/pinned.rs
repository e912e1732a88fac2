#![forbid(unsafe_code)]

//! Pinned scroll timelines: the per-section state machine that locks a
//! section in the viewport while its scroll range drives progress.
//!
//! Lifecycle:
//!
//! ```text
//! Unregistered --register--> Registered --scroll enters range--> Active
//!      ^                         ^  |
//!      |                         |  scroll exits range (either direction)
//!      +-------revert------------+--+
//! ```
//!
//! While `Active` the section is pinned and further scroll advances a
//! normalized progress value in [0.0, 1.0] instead of moving the section.
//! Leaving the range in either direction unpins; progress saturates at
//! 0.0 (above) or 1.0 (below) so the sampled visual state stays at the
//! authored off-stage or fully-exited pose.
//!
//! # Invariants
//!
//! 1. Progress is a pure function of the last observed scroll position
//!    and the registered boundaries — no hidden accumulation, so reverse
//!    scrolling retraces interpolation exactly.
//! 2. `revert()` returns to `Unregistered` with zero progress: a remount
//!    starts from the authored off-stage state.
//! 3. A degenerate scroll range is clamped to a small positive length to
//!    keep progress finite.
//!
//! # Failure Modes
//!
//! - Scroll observed while `Unregistered` is ignored.
//! - Boundary recomputation (`relayout`) preserves pin state and
//!   re-evaluates against the last scroll position.

use crate::sequence::SectionSequence;
use crate::visual::VisualState;

const MIN_RANGE: f32 = 1.0;

/// Viewport dimensions, in abstract layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width of the viewport.
    pub width: f32,
    /// Height of the viewport.
    pub height: f32,
}

/// Where a section sits in document flow and how much scroll it consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    /// Document offset of the section's top edge.
    pub top: f32,
    /// Scroll-range length as a multiple of viewport height. The stock
    /// pinned sections use 1.30; one uses 1.40.
    pub range_factor: f32,
}

impl SectionLayout {
    /// Layout with the default 130% scroll range.
    #[must_use]
    pub fn at(top: f32) -> Self {
        Self {
            top,
            range_factor: 1.30,
        }
    }

    /// Override the scroll-range factor (builder pattern).
    #[must_use]
    pub fn range_factor(mut self, factor: f32) -> Self {
        self.range_factor = factor;
        self
    }
}

/// Registration state of a pinned timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinState {
    /// Not mounted; no boundaries, no overrides.
    Unregistered,
    /// Mounted with computed boundaries; not currently pinned.
    Registered,
    /// Scroll is inside the trigger range; section is pinned.
    Active,
}

/// The scroll-binding state machine for one pinned section.
#[derive(Debug, Clone)]
pub struct PinnedTimeline {
    state: PinState,
    start: f32,
    end: f32,
    progress: f32,
}

impl PinnedTimeline {
    /// A timeline in the `Unregistered` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PinState::Unregistered,
            start: 0.0,
            end: MIN_RANGE,
            progress: 0.0,
        }
    }

    /// Compute trigger boundaries and enter `Registered`.
    pub fn register(&mut self, layout: SectionLayout, viewport: Viewport) {
        self.start = layout.top;
        let range = (layout.range_factor * viewport.height).max(MIN_RANGE);
        self.end = layout.top + range;
        self.state = PinState::Registered;
        self.progress = 0.0;
        tracing::debug!(start = self.start, end = self.end, "timeline registered");
    }

    /// Recompute boundaries against a new layout, keeping registration.
    ///
    /// No-op while `Unregistered`. The caller re-applies the current
    /// scroll position afterwards to settle `Active`/`Registered`.
    pub fn relayout(&mut self, layout: SectionLayout, viewport: Viewport) {
        if self.state == PinState::Unregistered {
            return;
        }
        self.start = layout.top;
        self.end = layout.top + (layout.range_factor * viewport.height).max(MIN_RANGE);
    }

    /// Observe an absolute scroll position.
    ///
    /// Ignored while `Unregistered`. Otherwise updates pin state and
    /// progress; large jumps land directly on the corresponding progress.
    pub fn on_scroll(&mut self, y: f32) {
        if self.state == PinState::Unregistered {
            return;
        }
        if y < self.start {
            if self.state == PinState::Active {
                tracing::debug!("section unpinned above range");
            }
            self.state = PinState::Registered;
            self.progress = 0.0;
        } else if y >= self.end {
            if self.state == PinState::Active {
                tracing::debug!("section unpinned below range");
            }
            self.state = PinState::Registered;
            self.progress = 1.0;
        } else {
            self.state = PinState::Active;
            self.progress = (y - self.start) / (self.end - self.start);
        }
    }

    /// Detach and clear all overrides. A future `register` starts fresh.
    pub fn revert(&mut self) {
        self.state = PinState::Unregistered;
        self.progress = 0.0;
    }

    /// Current registration state.
    #[must_use]
    pub fn state(&self) -> PinState {
        self.state
    }

    /// Whether the section is currently pinned in the viewport.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.state == PinState::Active
    }

    /// Normalized progress through the scroll range, in [0.0, 1.0].
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Trigger boundaries `(start, end)` in document coordinates.
    #[must_use]
    pub fn boundaries(&self) -> (f32, f32) {
        (self.start, self.end)
    }
}

impl Default for PinnedTimeline {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Sequencer registry
// ---------------------------------------------------------------------------

/// One registered section: its trigger plus its element sequence.
#[derive(Debug, Clone)]
pub struct RegisteredSection {
    id: String,
    timeline: PinnedTimeline,
    sequence: SectionSequence,
}

impl RegisteredSection {
    /// Section identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The trigger state machine.
    #[must_use]
    pub fn timeline(&self) -> &PinnedTimeline {
        &self.timeline
    }

    /// Sampled element states at the section's current progress.
    #[must_use]
    pub fn states(&self) -> Vec<(&str, VisualState)> {
        self.sequence.sample(self.timeline.progress())
    }
}

/// Owns every pinned timeline of the current page and fans scroll samples
/// out to them. Torn down wholesale on navigation so no binding survives
/// a route change.
#[derive(Debug)]
pub struct Sequencer {
    sections: Vec<RegisteredSection>,
    viewport: Viewport,
    scroll: f32,
}

impl Sequencer {
    /// An empty sequencer for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            sections: Vec::new(),
            viewport,
            scroll: 0.0,
        }
    }

    /// Register a section's sequence against the mounted element set.
    ///
    /// Tracks whose target is not in `mounted` are skipped (with a
    /// warning); the rest of the section registers normally.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        layout: SectionLayout,
        sequence: SectionSequence,
        mounted: &[&str],
    ) {
        let id = id.into();
        let sequence = sequence.bind(mounted);
        let mut timeline = PinnedTimeline::new();
        timeline.register(layout, self.viewport);
        timeline.on_scroll(self.scroll);
        tracing::debug!(section = %id, tracks = sequence.len(), "section registered");
        self.sections.push(RegisteredSection {
            id,
            timeline,
            sequence,
        });
    }

    /// Observe an absolute scroll position and update every section.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll = y.max(0.0);
        for section in &mut self.sections {
            section.timeline.on_scroll(self.scroll);
        }
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Recompute every trigger boundary against a new viewport, then
    /// re-apply the current scroll position.
    pub fn relayout(&mut self, viewport: Viewport, layouts: &[(&str, SectionLayout)]) {
        self.viewport = viewport;
        for section in &mut self.sections {
            if let Some((_, layout)) = layouts.iter().find(|(id, _)| *id == section.id) {
                section.timeline.relayout(*layout, viewport);
                section.timeline.on_scroll(self.scroll);
            }
        }
    }

    /// Revert every timeline and drop all registrations.
    ///
    /// Run on route change before the next page's sections mount, so no
    /// duplicate or orphaned binding accumulates across navigations.
    pub fn teardown(&mut self) {
        for section in &mut self.sections {
            section.timeline.revert();
        }
        let dropped = self.sections.len();
        self.sections.clear();
        if dropped > 0 {
            tracing::debug!(dropped, "sequencer torn down");
        }
    }

    /// The registered sections, in registration order.
    #[must_use]
    pub fn sections(&self) -> &[RegisteredSection] {
        &self.sections
    }

    /// Look up a registered section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&RegisteredSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
