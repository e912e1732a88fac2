#![forbid(unsafe_code)]

//! Mount timelines: time-driven entrance animation for sections that
//! animate once when they appear instead of scrubbing with scroll (the
//! hero section, and reveal-on-enter content sections).
//!
//! Each track interpolates from its authored off-stage state to
//! [`VisualState::REST`] over its own duration, starting at a staggered
//! offset, with a cubic ease-out settle. The timeline advances with
//! `tick(dt)` and its sampled output depends only on total elapsed time.
//!
//! # Invariants
//!
//! 1. Output is a deterministic function of accumulated elapsed time.
//! 2. `reset()` returns every track to its off-stage state.
//! 3. Zero-duration tracks are clamped to 1ns to avoid division by zero.
//!
//! # Failure Modes
//!
//! - Empty timeline: immediately complete, samples to nothing.
//! - Ticking past the end saturates; values hold at rest.

use std::time::Duration;

use crate::easing::{EasingFn, ease_out_cubic};
use crate::visual::VisualState;

/// One element's timed entrance.
#[derive(Debug, Clone)]
pub struct MountTrack {
    /// Element identifier within the section.
    pub name: String,
    /// Authored off-stage state before the track starts.
    pub off_stage: VisualState,
    /// Delay from timeline start.
    pub start: Duration,
    /// How long the entrance takes once started.
    pub duration: Duration,
}

/// A section's one-shot entrance, ticked by the frame loop.
#[derive(Debug, Clone)]
pub struct MountTimeline {
    tracks: Vec<MountTrack>,
    elapsed: Duration,
    easing: EasingFn,
}

impl MountTimeline {
    /// An empty timeline with the default ease-out settle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            elapsed: Duration::ZERO,
            easing: ease_out_cubic,
        }
    }

    /// Override the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Add a track (builder pattern). Zero durations are clamped to 1ns.
    #[must_use]
    pub fn track(
        mut self,
        name: impl Into<String>,
        off_stage: VisualState,
        start: Duration,
        duration: Duration,
    ) -> Self {
        self.tracks.push(MountTrack {
            name: name.into(),
            off_stage,
            start,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
        });
        self
    }

    /// Advance the timeline.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Return every track to its off-stage state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Total elapsed time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether every track has settled at rest.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tracks
            .iter()
            .all(|t| self.elapsed >= t.start + t.duration)
    }

    /// Overall progress in [0.0, 1.0]: elapsed over the latest track end.
    /// An empty timeline is immediately complete.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let total = self
            .tracks
            .iter()
            .map(|t| t.start + t.duration)
            .max()
            .unwrap_or(Duration::ZERO);
        if total.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0) as f32
    }

    /// Sample every track at the current elapsed time.
    #[must_use]
    pub fn sample(&self) -> Vec<(&str, VisualState)> {
        self.tracks
            .iter()
            .map(|t| {
                let u = if self.elapsed <= t.start {
                    0.0
                } else {
                    let into = self.elapsed - t.start;
                    (into.as_secs_f64() / t.duration.as_secs_f64()).min(1.0) as f32
                };
                let state = VisualState::lerp(t.off_stage, VisualState::REST, (self.easing)(u));
                (t.name.as_str(), state)
            })
            .collect()
    }
}

impl Default for MountTimeline {
    fn default() -> Self {
        Self::new()
    }
}
