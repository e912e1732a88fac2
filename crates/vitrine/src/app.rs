#![forbid(unsafe_code)]

//! The application shell: one [`App`] owns the theme store, the scroll
//! sequencer, and the current page, and turns scroll/tick input into a
//! renderable [`Frame`].
//!
//! # Invariants
//!
//! 1. Navigation tears the previous page down completely before the next
//!    page mounts: no pinned registration or reveal state survives a
//!    route change, and scroll returns to the top.
//! 2. `frame()` is read-only: sampling never advances any timeline.
//!
//! # Failure Modes
//!
//! - Scroll outside the document clamps to the scrollable range.
//! - Resizing re-derives every trigger boundary from the new layout and
//!   re-applies the current scroll position.

use std::time::Duration;

use vitrine_core::mount::MountTimeline;
use vitrine_core::pinned::{SectionLayout, Sequencer, Viewport};
use vitrine_core::visual::VisualState;
use vitrine_style::{Rgb, ThemeStore, ThemeTokens};

use crate::page::Page;
use crate::route::Route;
use crate::section::{REVEAL_TRIGGER, SectionKind};

/// A reveal section's live state on the current page.
#[derive(Debug)]
struct RevealRuntime {
    id: &'static str,
    top: f32,
    timeline: MountTimeline,
    started: bool,
}

/// One section's sampled output.
#[derive(Debug, Clone)]
pub struct SectionFrame {
    /// Section identifier.
    pub id: String,
    /// Whether the section is currently pinned in the viewport.
    pub pinned: bool,
    /// Per-element visual state, in authored order.
    pub elements: Vec<(String, VisualState)>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The active theme tokens.
    pub tokens: ThemeTokens,
    /// Sections in document order.
    pub sections: Vec<SectionFrame>,
}

/// The application shell.
#[derive(Debug)]
pub struct App {
    theme: ThemeStore,
    sequencer: Sequencer,
    viewport: Viewport,
    page: Page,
    reveals: Vec<RevealRuntime>,
}

impl App {
    /// Start the app on the home route.
    #[must_use]
    pub fn new(theme: ThemeStore, viewport: Viewport) -> Self {
        let mut app = Self {
            theme,
            sequencer: Sequencer::new(viewport),
            viewport,
            page: Page::for_route(Route::Home),
            reveals: Vec::new(),
        };
        app.mount();
        app
    }

    /// The current route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// The theme store.
    #[must_use]
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    /// Select an accent from the palette picker.
    pub fn select_accent(&self, rgb: Rgb) {
        self.theme.set_accent(rgb);
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.sequencer.scroll()
    }

    /// Navigate to a route: tear the current page down, reset scroll to
    /// the top, and mount the next page's sections.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(path = route.path(), "navigating");
        self.sequencer.teardown();
        self.reveals.clear();
        self.sequencer.scroll_to(0.0);
        self.page = Page::for_route(route);
        self.mount();
    }

    /// Observe an absolute scroll position, clamped to the document.
    pub fn scroll_to(&mut self, y: f32) {
        let max = (self.page.height(self.viewport) - self.viewport.height).max(0.0);
        self.sequencer.scroll_to(y.clamp(0.0, max));
        self.start_visible_reveals();
    }

    /// Advance time-driven entrances.
    pub fn tick(&mut self, dt: Duration) {
        for reveal in &mut self.reveals {
            if reveal.started {
                reveal.timeline.tick(dt);
            }
        }
    }

    /// Adopt a new viewport: recompute section layout and every trigger
    /// boundary, then re-apply the current scroll position.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let layouts = self.page.pinned_layouts(viewport);
        self.sequencer.relayout(viewport, &layouts);
        for (id, top) in self.page.tops(viewport) {
            if let Some(reveal) = self.reveals.iter_mut().find(|r| r.id == id) {
                reveal.top = top;
            }
        }
        self.start_visible_reveals();
    }

    /// Sample every section at the current scroll and elapsed time.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let sections = self
            .page
            .sections()
            .iter()
            .map(|def| match &def.kind {
                SectionKind::Pinned { .. } => {
                    let (pinned, elements) = match self.sequencer.section(def.id) {
                        Some(section) => (
                            section.timeline().is_pinned(),
                            section
                                .states()
                                .into_iter()
                                .map(|(name, state)| (name.to_string(), state))
                                .collect(),
                        ),
                        None => (false, Vec::new()),
                    };
                    SectionFrame {
                        id: def.id.to_string(),
                        pinned,
                        elements,
                    }
                }
                SectionKind::Reveal { .. } => {
                    let elements = self
                        .reveals
                        .iter()
                        .find(|r| r.id == def.id)
                        .map(|r| {
                            r.timeline
                                .sample()
                                .into_iter()
                                .map(|(name, state)| (name.to_string(), state))
                                .collect()
                        })
                        .unwrap_or_default();
                    SectionFrame {
                        id: def.id.to_string(),
                        pinned: false,
                        elements,
                    }
                }
            })
            .collect();
        Frame {
            tokens: self.theme.tokens(),
            sections,
        }
    }

    /// Register the current page's sections against the sequencer and set
    /// up its reveal timelines.
    fn mount(&mut self) {
        let tops = self.page.tops(self.viewport);
        for (def, (id, top)) in self.page.sections().iter().zip(tops) {
            match &def.kind {
                SectionKind::Pinned {
                    range_factor,
                    sequence,
                } => {
                    let names: Vec<&str> =
                        sequence.tracks().iter().map(|t| t.name.as_str()).collect();
                    let layout = SectionLayout::at(top).range_factor(*range_factor);
                    self.sequencer.register(id, layout, sequence.clone(), &names);
                }
                SectionKind::Reveal { timeline } => {
                    let mut timeline = timeline.clone();
                    timeline.reset();
                    self.reveals.push(RevealRuntime {
                        id,
                        top,
                        timeline,
                        started: false,
                    });
                }
            }
        }
        self.start_visible_reveals();
    }

    /// Start any reveal whose top has risen past the trigger line.
    fn start_visible_reveals(&mut self) {
        let trigger_line = self.sequencer.scroll() + REVEAL_TRIGGER * self.viewport.height;
        for reveal in &mut self.reveals {
            if !reveal.started && reveal.top <= trigger_line {
                reveal.started = true;
                tracing::debug!(section = reveal.id, "reveal started");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn app() -> App {
        App::new(ThemeStore::in_memory(), VIEWPORT)
    }

    #[test]
    fn starts_on_home_with_hero_running() {
        let mut app = app();
        assert_eq!(app.route(), Route::Home);
        // The hero is above the trigger line at scroll zero.
        app.tick(Duration::from_millis(100));
        let frame = app.frame();
        let hero = &frame.sections[0];
        assert_eq!(hero.id, "hero");
        assert!(hero.elements.iter().any(|(_, s)| s.opacity > 0.0));
    }

    #[test]
    fn scrolling_into_studio_pins_it() {
        let mut app = app();
        // Studio starts one viewport down.
        app.scroll_to(800.0 + 0.5 * 1.30 * 800.0);
        let frame = app.frame();
        let studio = frame.sections.iter().find(|s| s.id == "studio").unwrap();
        assert!(studio.pinned);
        assert!(studio.elements.iter().all(|(_, s)| *s == VisualState::REST));
    }

    #[test]
    fn navigation_resets_scroll_and_drops_registrations() {
        let mut app = app();
        app.scroll_to(3000.0);
        app.navigate(Route::Machines);
        assert_eq!(app.scroll(), 0.0);
        let frame = app.frame();
        assert_eq!(frame.sections.len(), 1);
        assert_eq!(frame.sections[0].id, "machines");
    }

    #[test]
    fn remount_restarts_from_off_stage() {
        let mut app = app();
        app.tick(Duration::from_secs(5));
        assert!(app.frame().sections[0]
            .elements
            .iter()
            .all(|(_, s)| *s == VisualState::REST));

        app.navigate(Route::Team);
        app.navigate(Route::Home);
        // Back on home, the hero starts again from zero opacity.
        let frame = app.frame();
        assert!(frame.sections[0].elements.iter().all(|(_, s)| s.opacity == 0.0));
    }

    #[test]
    fn reveal_waits_until_scrolled_into_view() {
        let mut app = app();
        let frame = app.frame();
        let work = frame.sections.iter().find(|s| s.id == "work").unwrap();
        assert!(work.elements.iter().all(|(_, s)| s.opacity == 0.0));

        // Scroll until the work section's top passes the trigger line,
        // then give it time to play.
        app.scroll_to(10_000.0);
        app.tick(Duration::from_secs(2));
        let frame = app.frame();
        let work = frame.sections.iter().find(|s| s.id == "work").unwrap();
        assert!(work.elements.iter().all(|(_, s)| *s == VisualState::REST));
    }

    #[test]
    fn reveal_does_not_rewind_when_scrolling_back_up() {
        let mut app = app();
        app.scroll_to(10_000.0);
        app.tick(Duration::from_secs(2));
        app.scroll_to(0.0);
        app.tick(Duration::from_millis(16));
        let frame = app.frame();
        let work = frame.sections.iter().find(|s| s.id == "work").unwrap();
        assert!(work.elements.iter().all(|(_, s)| *s == VisualState::REST));
    }

    #[test]
    fn scroll_clamps_to_document() {
        let mut app = app();
        app.scroll_to(1.0e9);
        let max = app.scroll();
        assert!(max > 0.0);
        app.scroll_to(max + 500.0);
        assert_eq!(app.scroll(), max);
        app.scroll_to(-10.0);
        assert_eq!(app.scroll(), 0.0);
    }

    #[test]
    fn resize_relayouts_triggers() {
        let mut app = app();
        app.scroll_to(800.0 + 100.0);
        assert!(app.frame().sections.iter().find(|s| s.id == "studio").unwrap().pinned);

        // A much taller viewport pushes studio's top past the same scroll
        // position.
        app.resize(Viewport {
            width: 1280.0,
            height: 2000.0,
        });
        let frame = app.frame();
        let studio = frame.sections.iter().find(|s| s.id == "studio").unwrap();
        assert!(!studio.pinned);
        assert!(studio.elements.iter().all(|(_, s)| s.opacity == 0.0));
    }

    #[test]
    fn accent_selection_flows_into_frames() {
        let app = app();
        let accent = vitrine_style::ACCENTS[3];
        app.select_accent(accent.rgb);
        assert_eq!(app.frame().tokens.accent, accent.rgb);
    }

    #[test]
    fn frame_is_read_only() {
        let mut app = app();
        app.tick(Duration::from_millis(200));
        let a = app.frame();
        let b = app.frame();
        assert_eq!(a.sections[0].elements, b.sections[0].elements);
    }
}
