#![forbid(unsafe_code)]

//! The studio section: pinned, with a left accent panel sliding in from
//! the left and the copy stack staggering up behind it.

use vitrine_core::sequence::{ElementTrack, SectionSequence};
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

#[must_use]
pub fn section() -> SectionDef {
    let sequence = SectionSequence::new()
        .track(
            ElementTrack::new("left_panel", VisualState::hidden(-0.40, 0.0), 0.0)
                .exit(VisualState::hidden(0.0, -0.18), 0.70),
        )
        .track(
            ElementTrack::new("center_image", VisualState::hidden_scaled(0.0, -0.60, 1.03), 0.06)
                .exit(VisualState::hidden(-0.18, 0.0), 0.70),
        )
        .track(
            ElementTrack::new("text_block", VisualState::hidden(0.40, 0.0), 0.10)
                .exit(VisualState::hidden(0.20, 0.0), 0.70),
        )
        .track(ElementTrack::new("headline", VisualState::hidden(0.0, 0.03), 0.14))
        .track(ElementTrack::new("body", VisualState::hidden(0.0, 0.025), 0.20))
        .track(ElementTrack::new("link", VisualState::hidden(0.0, 0.015), 0.25));
    SectionDef::pinned("studio", sequence)
}
