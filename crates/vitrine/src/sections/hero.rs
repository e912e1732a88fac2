#![forbid(unsafe_code)]

//! The hero section: a staggered one-shot entrance on page load.

use std::time::Duration;

use vitrine_core::mount::MountTimeline;
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

const MS: fn(u64) -> Duration = Duration::from_millis;

/// The landing hero. Images drift in from the edges first, then the
/// headline and links settle on top.
#[must_use]
pub fn section() -> SectionDef {
    let timeline = MountTimeline::new()
        .track(
            "top_left_image",
            VisualState::hidden_scaled(-0.12, 0.0, 0.98),
            Duration::ZERO,
            MS(600),
        )
        .track("right_panel", VisualState::hidden(0.12, 0.0), MS(150), MS(600))
        .track("bottom_left_block", VisualState::hidden(0.0, 0.10), MS(250), MS(600))
        .track(
            "bottom_right_image",
            VisualState::hidden_scaled(0.10, 0.0, 0.98),
            MS(350),
            MS(600),
        )
        .track("headline", VisualState::hidden(0.0, 0.05), MS(450), MS(500))
        .track("subline", VisualState::hidden(0.0, 0.04), MS(550), MS(500))
        .track("quick_links", VisualState::hidden(0.0, 0.03), MS(650), MS(400));
    SectionDef::reveal("hero", timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn hero_settles_within_two_seconds() {
        let SectionKind::Reveal { mut timeline } = section().kind else {
            panic!("hero is a reveal section");
        };
        timeline.tick(Duration::from_secs(2));
        assert!(timeline.is_complete());
    }

    #[test]
    fn headline_waits_for_images() {
        let SectionKind::Reveal { mut timeline } = section().kind else {
            panic!("hero is a reveal section");
        };
        timeline.tick(MS(200));
        let states = timeline.sample();
        let image = states.iter().find(|(n, _)| *n == "top_left_image").unwrap().1;
        let headline = states.iter().find(|(n, _)| *n == "headline").unwrap().1;
        assert!(image.opacity > 0.0);
        assert_eq!(headline.opacity, 0.0);
    }
}
