#![forbid(unsafe_code)]

//! The shared catalog-page section: a reveal header followed by a grid of
//! staggered cards. The machines, tutorials, and team pages all use it,
//! differing only in card count.

use std::time::Duration;

use vitrine_core::mount::MountTimeline;
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

const CARD_STAGGER: Duration = Duration::from_millis(80);

/// A catalog section with `cards` grid entries.
#[must_use]
pub fn section(id: &'static str, cards: usize) -> SectionDef {
    let mut timeline = MountTimeline::new()
        .track(
            "header",
            VisualState::hidden(0.0, 0.04),
            Duration::ZERO,
            Duration::from_millis(500),
        )
        .track(
            "filters",
            VisualState::hidden(0.0, 0.02),
            Duration::from_millis(120),
            Duration::from_millis(400),
        );
    for i in 0..cards as u32 {
        timeline = timeline.track(
            format!("card_{}", i + 1),
            VisualState::hidden_scaled(0.0, 0.04, 0.98),
            Duration::from_millis(200) + CARD_STAGGER * i,
            Duration::from_millis(450),
        );
    }
    SectionDef::reveal(id, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn one_track_per_card_plus_chrome() {
        let SectionKind::Reveal { timeline } = section("machines", 12).kind else {
            panic!("catalog sections reveal");
        };
        assert_eq!(timeline.sample().len(), 12 + 2);
    }

    #[test]
    fn cards_stagger_in_order() {
        let SectionKind::Reveal { mut timeline } = section("team", 4).kind else {
            panic!("catalog sections reveal");
        };
        timeline.tick(Duration::from_millis(260));
        let states = timeline.sample();
        let first = states.iter().find(|(n, _)| *n == "card_1").unwrap().1;
        let last = states.iter().find(|(n, _)| *n == "card_4").unwrap().1;
        assert!(first.opacity > last.opacity);
    }
}
