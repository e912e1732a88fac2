#![forbid(unsafe_code)]

//! The collaboration section: pinned, a five-image mosaic gathering
//! around a headline block.

use vitrine_core::sequence::{ElementTrack, SectionSequence};
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

#[must_use]
pub fn section() -> SectionDef {
    let sequence = SectionSequence::new()
        .track(
            ElementTrack::new("headline_block", VisualState::hidden(-0.50, 0.0), 0.0)
                .exit(VisualState::hidden(-0.30, 0.0), 0.70),
        )
        .track(
            ElementTrack::new("top_center_image", VisualState::hidden(0.0, -0.40), 0.08)
                .exit(VisualState::hidden(0.0, -0.20), 0.74),
        )
        .track(
            ElementTrack::new("top_right_panel", VisualState::hidden(0.30, 0.0), 0.10)
                .exit(VisualState::hidden(0.20, 0.0), 0.74),
        )
        .track(
            ElementTrack::new("bottom_left_image", VisualState::hidden(0.0, 0.60), 0.12)
                .exit(VisualState::hidden(0.0, 0.30), 0.78),
        )
        .track(
            ElementTrack::new("bottom_right_image", VisualState::hidden(0.50, 0.0), 0.14)
                .exit(VisualState::hidden(0.30, 0.0), 0.78),
        )
        .track(ElementTrack::new("headline", VisualState::hidden(0.0, 0.035), 0.18))
        .track(ElementTrack::new("subline", VisualState::hidden(0.0, 0.022), 0.22));
    SectionDef::pinned("collaboration", sequence)
}
