#![forbid(unsafe_code)]

//! Per-element visual state: the property set a track animates.
//!
//! Offsets are expressed in viewport fractions (`dx` in viewport widths,
//! `dy` in viewport heights) so a state authored once renders correctly at
//! any viewport size. `scale` and `opacity` are plain multipliers.

/// The animatable properties of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Horizontal offset from the element's resting position, in viewport
    /// widths. Negative is off-stage to the left.
    pub dx: f32,
    /// Vertical offset in viewport heights. Negative is above.
    pub dy: f32,
    /// Uniform scale multiplier.
    pub scale: f32,
    /// Opacity in [0.0, 1.0].
    pub opacity: f32,
}

impl VisualState {
    /// The authored resting state: on-stage, full size, fully opaque.
    pub const REST: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// An off-stage or exit state with the given offsets, default scale,
    /// and zero opacity — the common authored shape.
    #[must_use]
    pub const fn hidden(dx: f32, dy: f32) -> Self {
        Self {
            dx,
            dy,
            scale: 1.0,
            opacity: 0.0,
        }
    }

    /// Same as [`hidden`](Self::hidden) with an explicit scale.
    #[must_use]
    pub const fn hidden_scaled(dx: f32, dy: f32, scale: f32) -> Self {
        Self {
            dx,
            dy,
            scale,
            opacity: 0.0,
        }
    }

    /// Componentwise linear interpolation between two states.
    ///
    /// `t` is clamped to [0.0, 1.0]; `lerp(a, b, 0.0) == a` and
    /// `lerp(a, b, 1.0) == b` exactly.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return a;
        }
        if t == 1.0 {
            return b;
        }
        Self {
            dx: a.dx + (b.dx - a.dx) * t,
            dy: a.dy + (b.dy - a.dy) * t,
            scale: a.scale + (b.scale - a.scale) * t,
            opacity: a.opacity + (b.opacity - a.opacity) * t,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = VisualState::hidden(-0.4, 0.0);
        let b = VisualState::REST;
        assert_eq!(VisualState::lerp(a, b, 0.0), a);
        assert_eq!(VisualState::lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = VisualState::hidden(-0.4, 0.2);
        let mid = VisualState::lerp(a, VisualState::REST, 0.5);
        assert!((mid.dx - -0.2).abs() < 1e-6);
        assert!((mid.dy - 0.1).abs() < 1e-6);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = VisualState::hidden(-1.0, 0.0);
        let b = VisualState::REST;
        assert_eq!(VisualState::lerp(a, b, -2.0), a);
        assert_eq!(VisualState::lerp(a, b, 9.0), b);
    }

    #[test]
    fn default_is_rest() {
        assert_eq!(VisualState::default(), VisualState::REST);
    }

    #[test]
    fn hidden_scaled_keeps_scale() {
        let s = VisualState::hidden_scaled(0.0, -0.6, 1.03);
        assert_eq!(s.scale, 1.03);
        assert_eq!(s.opacity, 0.0);
    }
}
