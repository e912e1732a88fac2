#![forbid(unsafe_code)]

//! Easing curves used by the sequencing primitives.
//!
//! All curves map `t ∈ [0.0, 1.0]` to `[0.0, 1.0]` with `f(0) = 0` and
//! `f(1) = 1`, and are monotonically non-decreasing. Inputs outside the
//! unit interval are clamped before evaluation.
//!
//! # Invariants
//!
//! 1. Every curve is deterministic and side-effect free.
//! 2. No curve overshoots: output stays within [0.0, 1.0].
//! 3. `ease_linear` is the identity on the unit interval — the only curve
//!    allowed for scrubbed entrance interpolation, which must retrace
//!    exactly under reverse scrolling.

/// An easing function: progress in, eased progress out.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing. Used for scrubbed entrance tracks.
#[must_use]
pub fn ease_linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in: starts slow, accelerates. Used for exit tracks so
/// elements appear to leave with increasing speed.
#[must_use]
pub fn ease_in_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Cubic ease-out: fast start, gentle settle. Used by the time-driven
/// mount timeline.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
