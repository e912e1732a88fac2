#![forbid(unsafe_code)]

//! The work gallery: reveal-on-enter with staggered project cards.

use std::time::Duration;

use vitrine_core::mount::MountTimeline;
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

const CARD_STAGGER: Duration = Duration::from_millis(120);

#[must_use]
pub fn section() -> SectionDef {
    let mut timeline = MountTimeline::new().track(
        "title",
        VisualState::hidden(0.0, 0.04),
        Duration::ZERO,
        Duration::from_millis(500),
    );
    for i in 0..3u32 {
        timeline = timeline.track(
            format!("card_{}", i + 1),
            VisualState::hidden_scaled(0.0, 0.05, 0.98),
            CARD_STAGGER * (i + 1),
            Duration::from_millis(500),
        );
    }
    SectionDef::reveal("work", timeline)
}
