#![forbid(unsafe_code)]

//! Section sequences: scroll progress in, per-element visual state out.
//!
//! A [`SectionSequence`] holds one [`ElementTrack`] per animated element
//! and evaluates all of them as a pure function of normalized scroll
//! progress `p ∈ [0.0, 1.0]`. Progress is divided into three phases:
//!
//! - entrance `[0.00, 0.30]`: each track interpolates from its authored
//!   off-stage state to [`VisualState::REST`], linearly (no elasticity),
//!   starting at the track's stagger offset and completing by 0.30;
//! - hold `[0.30, 0.70]`: every track is exactly at rest;
//! - exit `[0.70, 1.00]`: tracks with an authored exit state accelerate
//!   away from rest (quadratic ease-in), fully exited at 1.0.
//!
//! # Invariants
//!
//! 1. `sample(p)` is deterministic and accumulation-free: reverse
//!    scrubbing retraces the exact same states.
//! 2. `sample(0.0)` yields each track's authored off-stage state,
//!    `sample(0.5)` yields rest, `sample(1.0)` yields the authored exit
//!    state (or rest for tracks without one).
//! 3. Entrance interpolation is monotonic in `p` for every track.
//!
//! # Failure Modes
//!
//! - Stagger offsets at or past a phase boundary are clamped back inside
//!   the phase so every track still completes on time.
//! - Binding against a mounted-element set skips unknown targets without
//!   aborting the rest of the section.

use crate::easing::{ease_in_quad, ease_linear};
use crate::visual::VisualState;

/// Scroll-progress fraction at which the entrance phase ends.
pub const ENTRANCE_END: f32 = 0.30;
/// Scroll-progress fraction at which the exit phase begins.
pub const EXIT_START: f32 = 0.70;

// Latest allowed stagger offsets. A track starting exactly on a phase
// boundary would divide by zero when normalizing.
const MAX_ENTER_AT: f32 = ENTRANCE_END - 0.01;
const MAX_EXIT_AT: f32 = 0.99;

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// The three sub-ranges of a pinned section's scroll progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Elements travel from off-stage to rest.
    Entrance,
    /// Elements hold their resting state.
    Hold,
    /// Elements accelerate off-stage.
    Exit,
}

impl Phase {
    /// Which phase a clamped progress value falls in.
    ///
    /// Boundaries belong to the later phase so that `of(0.30)` and
    /// `of(0.70)` both report the settled/leaving side.
    #[must_use]
    pub fn of(p: f32) -> Self {
        let p = p.clamp(0.0, 1.0);
        if p < ENTRANCE_END {
            Self::Entrance
        } else if p < EXIT_START {
            Self::Hold
        } else {
            Self::Exit
        }
    }
}

// ---------------------------------------------------------------------------
// Element tracks
// ---------------------------------------------------------------------------

/// One element's authored animation: where it starts, when it enters,
/// and (optionally) where and when it leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTrack {
    /// Stable element identifier within the section.
    pub name: String,
    /// Authored off-stage state at `p = 0`.
    pub off_stage: VisualState,
    /// Stagger offset within the entrance phase, in `[0.0, 0.29]`.
    pub enter_at: f32,
    /// Authored fully-exited state at `p = 1`. `None` holds rest through
    /// the exit phase.
    pub exit_to: Option<VisualState>,
    /// Stagger offset for the exit, in `[0.70, 0.99]`.
    pub exit_at: f32,
}

impl ElementTrack {
    /// A track that enters from `off_stage` at the given stagger offset
    /// and holds rest thereafter.
    #[must_use]
    pub fn new(name: impl Into<String>, off_stage: VisualState, enter_at: f32) -> Self {
        Self {
            name: name.into(),
            off_stage,
            enter_at: enter_at.clamp(0.0, MAX_ENTER_AT),
            exit_to: None,
            exit_at: EXIT_START,
        }
    }

    /// Author an exit for this track (builder pattern).
    #[must_use]
    pub fn exit(mut self, exit_to: VisualState, exit_at: f32) -> Self {
        self.exit_to = Some(exit_to);
        self.exit_at = exit_at.clamp(EXIT_START, MAX_EXIT_AT);
        self
    }

    /// Evaluate this track at clamped progress `p`.
    #[must_use]
    pub fn sample(&self, p: f32) -> VisualState {
        let p = p.clamp(0.0, 1.0);
        if p <= ENTRANCE_END {
            let u = if p <= self.enter_at {
                0.0
            } else {
                (p - self.enter_at) / (ENTRANCE_END - self.enter_at)
            };
            return VisualState::lerp(self.off_stage, VisualState::REST, ease_linear(u));
        }
        if p < EXIT_START {
            return VisualState::REST;
        }
        match self.exit_to {
            None => VisualState::REST,
            Some(exit_to) => {
                let u = if p <= self.exit_at {
                    0.0
                } else {
                    (p - self.exit_at) / (1.0 - self.exit_at)
                };
                VisualState::lerp(VisualState::REST, exit_to, ease_in_quad(u))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Section sequence
// ---------------------------------------------------------------------------

/// All animated elements of one section, evaluated together.
#[derive(Debug, Clone, Default)]
pub struct SectionSequence {
    tracks: Vec<ElementTrack>,
}

impl SectionSequence {
    /// An empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Append a track (builder pattern).
    #[must_use]
    pub fn track(mut self, track: ElementTrack) -> Self {
        self.tracks.push(track);
        self
    }

    /// Number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the sequence has no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The tracks, in authored order.
    #[must_use]
    pub fn tracks(&self) -> &[ElementTrack] {
        &self.tracks
    }

    /// Keep only tracks whose target is in `mounted`, logging and skipping
    /// the rest. A target missing at registration time must not abort the
    /// section's remaining tracks.
    #[must_use]
    pub fn bind(mut self, mounted: &[&str]) -> Self {
        self.tracks.retain(|t| {
            let present = mounted.contains(&t.name.as_str());
            if !present {
                tracing::warn!(target = %t.name, "animation target not mounted; skipping track");
            }
            present
        });
        self
    }

    /// Evaluate every track at clamped progress `p`.
    #[must_use]
    pub fn sample(&self, p: f32) -> Vec<(&str, VisualState)> {
        self.tracks
            .iter()
            .map(|t| (t.name.as_str(), t.sample(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio_panel() -> ElementTrack {
        ElementTrack::new("left_panel", VisualState::hidden(-0.40, 0.0), 0.0)
            .exit(VisualState::hidden(0.0, -0.18), EXIT_START)
    }

    #[test]
    fn phase_boundaries() {
        assert_eq!(Phase::of(0.0), Phase::Entrance);
        assert_eq!(Phase::of(0.29), Phase::Entrance);
        assert_eq!(Phase::of(0.30), Phase::Hold);
        assert_eq!(Phase::of(0.69), Phase::Hold);
        assert_eq!(Phase::of(0.70), Phase::Exit);
        assert_eq!(Phase::of(1.0), Phase::Exit);
        // Out-of-range progress clamps.
        assert_eq!(Phase::of(-1.0), Phase::Entrance);
        assert_eq!(Phase::of(2.0), Phase::Exit);
    }

    #[test]
    fn sample_zero_is_off_stage() {
        let t = studio_panel();
        assert_eq!(t.sample(0.0), VisualState::hidden(-0.40, 0.0));
    }

    #[test]
    fn sample_midpoint_is_rest() {
        let t = studio_panel();
        assert_eq!(t.sample(0.5), VisualState::REST);
    }

    #[test]
    fn sample_one_is_fully_exited() {
        let t = studio_panel();
        assert_eq!(t.sample(1.0), VisualState::hidden(0.0, -0.18));
    }

    #[test]
    fn entrance_completes_at_phase_end() {
        let t = ElementTrack::new("late", VisualState::hidden(0.4, 0.0), 0.25);
        assert_eq!(t.sample(ENTRANCE_END), VisualState::REST);
    }

    #[test]
    fn staggered_track_waits_for_its_offset() {
        let t = ElementTrack::new("late", VisualState::hidden(0.4, 0.0), 0.20);
        assert_eq!(t.sample(0.10), VisualState::hidden(0.4, 0.0));
        assert_eq!(t.sample(0.20), VisualState::hidden(0.4, 0.0));
        let mid = t.sample(0.25);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    }

    #[test]
    fn track_without_exit_holds_rest() {
        let t = ElementTrack::new("label", VisualState::hidden(0.0, 0.1), 0.0);
        assert_eq!(t.sample(0.85), VisualState::REST);
        assert_eq!(t.sample(1.0), VisualState::REST);
    }

    #[test]
    fn exit_accelerates() {
        let t = studio_panel();
        // Quadratic ease-in: the back half of the exit moves further.
        let early = t.sample(0.85).opacity - t.sample(0.70).opacity;
        let late = t.sample(1.0).opacity - t.sample(0.85).opacity;
        assert!(late.abs() > early.abs());
    }

    #[test]
    fn staggered_exit_waits_for_its_offset() {
        let t = ElementTrack::new("img", VisualState::hidden(0.0, -0.6), 0.06)
            .exit(VisualState::hidden(-0.18, 0.0), 0.74);
        assert_eq!(t.sample(0.72), VisualState::REST);
        assert_eq!(t.sample(1.0), VisualState::hidden(-0.18, 0.0));
    }

    #[test]
    fn sample_is_pure_under_reverse_scrub() {
        let t = studio_panel();
        let forward: Vec<_> = (0..=100).map(|i| t.sample(i as f32 / 100.0)).collect();
        let backward: Vec<_> = (0..=100)
            .rev()
            .map(|i| t.sample(i as f32 / 100.0))
            .collect();
        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(f, b);
        }
    }

    #[test]
    fn enter_at_clamped_below_phase_end() {
        let t = ElementTrack::new("x", VisualState::hidden(0.1, 0.0), 0.95);
        assert!(t.enter_at < ENTRANCE_END);
        // Still completes by the phase boundary.
        assert_eq!(t.sample(ENTRANCE_END), VisualState::REST);
    }

    #[test]
    fn exit_at_clamped_into_exit_phase() {
        let t =
            ElementTrack::new("x", VisualState::hidden(0.1, 0.0), 0.0).exit(VisualState::hidden(0.2, 0.0), 0.10);
        assert_eq!(t.exit_at, EXIT_START);
    }

    #[test]
    fn bind_skips_missing_targets() {
        let seq = SectionSequence::new()
            .track(studio_panel())
            .track(ElementTrack::new("ghost", VisualState::hidden(0.1, 0.0), 0.0))
            .bind(&["left_panel"]);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.tracks()[0].name, "left_panel");
    }

    #[test]
    fn bind_empty_mounted_set_leaves_empty_sequence() {
        let seq = SectionSequence::new().track(studio_panel()).bind(&[]);
        assert!(seq.is_empty());
        assert!(seq.sample(0.5).is_empty());
    }

    #[test]
    fn sequence_samples_all_tracks() {
        let seq = SectionSequence::new()
            .track(studio_panel())
            .track(ElementTrack::new("headline", VisualState::hidden(0.0, 0.05), 0.14));
        let states = seq.sample(0.5);
        assert_eq!(states.len(), 2);
        assert!(states.iter().all(|(_, s)| *s == VisualState::REST));
    }

    #[test]
    fn discrete_jump_lands_on_interpolated_state() {
        // Jumping straight from 0 to deep in the exit phase must land on
        // the same state a continuous scrub would produce.
        let t = studio_panel();
        let jumped = t.sample(0.9);
        let scrubbed = {
            let mut last = VisualState::REST;
            for i in 0..=90 {
                last = t.sample(i as f32 / 100.0);
            }
            last
        };
        assert_eq!(jumped, scrubbed);
    }
}
