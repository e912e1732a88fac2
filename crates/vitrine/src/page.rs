#![forbid(unsafe_code)]

//! Page composition: which sections each route renders, in document order,
//! and where they land in document flow.

use vitrine_core::pinned::{SectionLayout, Viewport};

use crate::route::Route;
use crate::section::{SectionDef, SectionKind};
use crate::sections;

/// One route's sections, in document order.
#[derive(Debug, Clone)]
pub struct Page {
    route: Route,
    sections: Vec<SectionDef>,
}

impl Page {
    /// Build the page for a route.
    #[must_use]
    pub fn for_route(route: Route) -> Self {
        let sections = match route {
            Route::Home => vec![
                sections::hero::section(),
                sections::studio::section(),
                sections::build::section(),
                sections::craft::section(),
                sections::work::section(),
                sections::collaboration::section(),
                sections::notes::section(),
                sections::contact::section(),
            ],
            Route::Machines => {
                vec![sections::catalog::section("machines", vitrine_content::EQUIPMENT.len())]
            }
            Route::Tutorials => {
                vec![sections::catalog::section("tutorials", vitrine_content::TUTORIALS.len())]
            }
            Route::Team => vec![sections::catalog::section("team", vitrine_content::TEAM.len())],
        };
        Self { route, sections }
    }

    /// The route this page renders.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// The sections, in document order.
    #[must_use]
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    /// Document offset of each section's top edge, in document order.
    #[must_use]
    pub fn tops(&self, viewport: Viewport) -> Vec<(&'static str, f32)> {
        let mut top = 0.0;
        self.sections
            .iter()
            .map(|def| {
                let entry = (def.id, top);
                top += def.scroll_extent(viewport);
                entry
            })
            .collect()
    }

    /// Trigger layout for each pinned section.
    #[must_use]
    pub fn pinned_layouts(&self, viewport: Viewport) -> Vec<(&'static str, SectionLayout)> {
        let tops = self.tops(viewport);
        self.sections
            .iter()
            .zip(tops)
            .filter_map(|(def, (id, top))| match &def.kind {
                SectionKind::Pinned { range_factor, .. } => {
                    Some((id, SectionLayout::at(top).range_factor(*range_factor)))
                }
                SectionKind::Reveal { .. } => None,
            })
            .collect()
    }

    /// Total document height.
    #[must_use]
    pub fn height(&self, viewport: Viewport) -> f32 {
        self.sections
            .iter()
            .map(|def| def.scroll_extent(viewport))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn home_has_all_eight_sections() {
        let page = Page::for_route(Route::Home);
        let ids: Vec<_> = page.sections().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [
                "hero",
                "studio",
                "build",
                "craft",
                "work",
                "collaboration",
                "notes",
                "contact"
            ]
        );
    }

    #[test]
    fn tops_accumulate_pin_spacers() {
        let page = Page::for_route(Route::Home);
        let tops = page.tops(VIEWPORT);
        // Hero occupies one viewport, studio one viewport plus its spacer.
        assert_eq!(tops[1], ("studio", 800.0));
        assert_eq!(tops[2], ("build", 800.0 + 800.0 + 1.30 * 800.0));
    }

    #[test]
    fn home_pins_four_sections() {
        let page = Page::for_route(Route::Home);
        let pinned = page.pinned_layouts(VIEWPORT);
        let ids: Vec<_> = pinned.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, ["studio", "build", "craft", "collaboration"]);
    }

    #[test]
    fn catalog_pages_have_one_reveal_section() {
        for route in [Route::Machines, Route::Tutorials, Route::Team] {
            let page = Page::for_route(route);
            assert_eq!(page.sections().len(), 1);
            assert!(page.pinned_layouts(VIEWPORT).is_empty());
        }
    }

    #[test]
    fn height_sums_extents() {
        let page = Page::for_route(Route::Team);
        assert_eq!(page.height(VIEWPORT), 800.0);
    }
}
