#![forbid(unsafe_code)]

//! The navigation surface: four routes, each rendering one page.

/// A navigable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// The scroll-driven landing page.
    Home,
    /// The equipment inventory.
    Machines,
    /// The tutorial catalog.
    Tutorials,
    /// The team roster.
    Team,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Machines, Route::Tutorials, Route::Team];

    /// The route's path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Machines => "/machines",
            Self::Tutorials => "/tutorials",
            Self::Team => "/team",
        }
    }

    /// Resolve a path to a route, if it names one.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Machines => "Machines",
            Self::Tutorials => "Tutorials",
            Self::Team => "Team",
        }
    }
}
