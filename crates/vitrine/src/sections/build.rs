#![forbid(unsafe_code)]

//! The build section: pinned with a longer 140% scroll range and a
//! four-corner composition converging on a call to action.

use vitrine_core::sequence::{ElementTrack, SectionSequence};
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

#[must_use]
pub fn section() -> SectionDef {
    let sequence = SectionSequence::new()
        .track(
            ElementTrack::new("top_left_image", VisualState::hidden_scaled(-0.60, 0.0, 1.03), 0.0)
                .exit(VisualState::hidden(-0.30, 0.0), 0.70),
        )
        .track(
            ElementTrack::new("right_panel", VisualState::hidden(0.40, 0.0), 0.06)
                .exit(VisualState::hidden(0.30, 0.0), 0.70),
        )
        .track(
            ElementTrack::new("bottom_left_block", VisualState::hidden(0.0, 0.50), 0.10)
                .exit(VisualState::hidden(0.0, 0.30), 0.70),
        )
        .track(
            ElementTrack::new("bottom_right_image", VisualState::hidden(0.50, 0.0), 0.14)
                .exit(VisualState::hidden(0.30, 0.18), 0.70),
        )
        .track(ElementTrack::new("headline", VisualState::hidden(0.0, 0.035), 0.18))
        .track(ElementTrack::new("subline", VisualState::hidden(0.0, 0.022), 0.22))
        .track(
            // The CTA fades out in place on exit.
            ElementTrack::new("cta", VisualState::hidden_scaled(0.0, 0.0, 0.9), 0.26)
                .exit(VisualState::hidden(0.0, 0.0), 0.70),
        );
    SectionDef::pinned("build", sequence).range_factor(1.40)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn uses_extended_scroll_range() {
        let SectionKind::Pinned { range_factor, .. } = section().kind else {
            panic!("build is pinned");
        };
        assert_eq!(range_factor, 1.40);
    }

    #[test]
    fn cta_fades_in_place() {
        let SectionKind::Pinned { sequence, .. } = section().kind else {
            panic!("build is pinned");
        };
        let states = sequence.sample(1.0);
        let cta = states.iter().find(|(n, _)| *n == "cta").unwrap().1;
        assert_eq!(cta.opacity, 0.0);
        assert_eq!(cta.dx, 0.0);
        assert_eq!(cta.dy, 0.0);
    }
}
