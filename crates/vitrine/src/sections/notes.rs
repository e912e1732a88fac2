#![forbid(unsafe_code)]

//! The notes list: reveal-on-enter, rows sliding in from the left.

use std::time::Duration;

use vitrine_core::mount::MountTimeline;
use vitrine_core::visual::VisualState;

use crate::section::SectionDef;

const ROW_STAGGER: Duration = Duration::from_millis(120);

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
            format!("row_{}", i + 1),
            VisualState::hidden(-0.03, 0.0),
            ROW_STAGGER * (i + 1),
            Duration::from_millis(450),
        );
    }
    SectionDef::reveal("notes", timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    #[test]
    fn settles_completely() {
        let SectionKind::Reveal { mut timeline } = section().kind else {
            panic!("notes is a reveal section");
        };
        timeline.tick(Duration::from_secs(1));
        assert!(timeline.is_complete());
    }
}
