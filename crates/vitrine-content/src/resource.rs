#![forbid(unsafe_code)]

//! External resource links attached to catalog entries.

/// What kind of material a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Written walkthrough.
    Guide,
    /// Video material.
    Video,
    /// Reference documentation.
    Documentation,
    /// Source repository.
    Github,
}

impl ResourceKind {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Video => "video",
            Self::Documentation => "documentation",
            Self::Github => "github",
        }
    }
}

/// One link shown under an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    /// Material kind.
    pub kind: ResourceKind,
    /// Link title.
    pub title: &'static str,
    /// Target URL.
    pub url: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_lowercase() {
        for kind in [
            ResourceKind::Guide,
            ResourceKind::Video,
            ResourceKind::Documentation,
            ResourceKind::Github,
        ] {
            assert_eq!(kind.label(), kind.label().to_ascii_lowercase());
        }
    }
}
