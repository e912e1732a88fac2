#![forbid(unsafe_code)]

//! The contact section: reveal-on-enter heading, details, and form.

use std::time::Duration;

use vitrine_core::mount::MountTimeline;
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

#[must_use]
pub fn section() -> SectionDef {
    let timeline = MountTimeline::new()
        .track(
            "heading",
            VisualState::hidden(0.0, 0.04),
            Duration::ZERO,
            Duration::from_millis(500),
        )
        .track(
            "details",
            VisualState::hidden(0.0, 0.03),
            Duration::from_millis(150),
            Duration::from_millis(500),
        )
        .track(
            "form",
            VisualState::hidden(0.0, 0.05),
            Duration::from_millis(250),
            Duration::from_millis(600),
        );
    SectionDef::reveal("contact", timeline)
}
