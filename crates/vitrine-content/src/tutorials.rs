#![forbid(unsafe_code)]

//! The tutorial catalog: guided introductions to the workshop equipment.

use crate::contains_ignore_case;
use crate::resource::{ResourceKind, ResourceLink};

/// How much prior experience a tutorial assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    /// No prior experience needed.
    Beginner,
    /// Assumes the beginner material.
    Intermediate,
    /// Assumes confident machine operation.
    Advanced,
}

impl Difficulty {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutorial {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Catalog category.
    pub category: &'static str,
    /// Assumed experience level.
    pub difficulty: Difficulty,
    /// Expected duration, as displayed.
    pub duration: &'static str,
    /// Optional step-by-step content; empty when the tutorial links out.
    pub steps: &'static [&'static str],
    /// Related material.
    pub resources: &'static [ResourceLink],
}

/// The catalog, in display order.
pub const TUTORIALS: &[Tutorial] = &[
    Tutorial {
        id: "bambu-first-print",
        title: "Bambu Lab: Your First Print",
        description: "Slice a model in Bambu Studio and run it on the P1S, from filament load to part removal.",
        category: "3D Printing",
        difficulty: Difficulty::Beginner,
        duration: "20 min",
        steps: &[
            "Import your model into Bambu Studio",
            "Pick a preset profile and slice",
            "Load filament and start the print",
            "Remove the part and clean the plate",
        ],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "Bambu Studio Setup",
                url: "#",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "P1S User Manual",
                url: "#",
            },
            ResourceLink {
                kind: ResourceKind::Github,
                title: "Test Print Models",
                url: "#",
            },
        ],
    },
    Tutorial {
        id: "bambu-ams",
        title: "Bambu Lab: Multi-Material with AMS",
        description: "Set up the AMS for multi-color prints and manage filament changes cleanly.",
        category: "3D Printing",
        difficulty: Difficulty::Intermediate,
        duration: "30 min",
        steps: &[],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "AMS Loading Tutorial",
                url: "#",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "AMS Best Practices",
                url: "#",
            },
        ],
    },
    Tutorial {
        id: "h2d-laser",
        title: "Bambu H2D: Laser Engraving",
        description: "Swap the H2D to its laser module and engrave safely on approved materials.",
        category: "3D Printing",
        difficulty: Difficulty::Intermediate,
        duration: "25 min",
        steps: &[],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "Laser Safety & Setup",
                url: "#",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "Laser Parameters Guide",
                url: "#",
            },
        ],
    },
    Tutorial {
        id: "j55-full-color",
        title: "Stratasys J55: Full-Color Printing",
        description: "Prepare a textured, full-color model for Polyjet printing in GrabCAD Print.",
        category: "3D Printing",
        difficulty: Difficulty::Advanced,
        duration: "45 min",
        steps: &[],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "GrabCAD Print Workflow",
                url: "#",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "Polyjet Material Guide",
                url: "#",
            },
        ],
    },
    Tutorial {
        id: "inspire-scanning",
        title: "Revopoint Inspire: 3D Scanning Basics",
        description: "Capture a small object with the Inspire and clean the scan in Revo Scan.",
        category: "3D Scanning",
        difficulty: Difficulty::Beginner,
        duration: "20 min",
        steps: &[
            "Mount the object on the turntable",
            "Calibrate and set exposure",
            "Capture overlapping passes",
            "Fuse and export the mesh",
        ],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "Scanning Technique",
                url: "#",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "Revo Scan Software",
                url: "#",
            },
        ],
    },
    Tutorial {
        id: "artec-eva-scanning",
        title: "Artec Eva: Professional Scanning",
        description: "Plan, capture, and post-process a precision scan in Artec Studio.",
        category: "3D Scanning",
        difficulty: Difficulty::Advanced,
        duration: "60 min",
        steps: &[],
        resources: &[],
    },
    Tutorial {
        id: "soldering-basics",
        title: "Soldering: Through-Hole Basics",
        description: "Make clean, reliable joints at a temperature-controlled station.",
        category: "Electronics",
        difficulty: Difficulty::Beginner,
        duration: "30 min",
        steps: &[
            "Tin the iron and set the temperature",
            "Practise joints on a scrap board",
            "Inspect and rework cold joints",
        ],
        resources: &[],
    },
    Tutorial {
        id: "microcontroller-intro",
        title: "Microcontrollers: First Sketch",
        description: "Flash a first Arduino sketch and read a sensor over serial.",
        category: "Electronics",
        difficulty: Difficulty::Beginner,
        duration: "40 min",
        steps: &[],
        resources: &[ResourceLink {
            kind: ResourceKind::Github,
            title: "Starter Sketches",
            url: "#",
        }],
    },
];

/// Entries at a difficulty level.
#[must_use]
pub fn by_difficulty(difficulty: Difficulty) -> Vec<&'static Tutorial> {
    TUTORIALS.iter().filter(|t| t.difficulty == difficulty).collect()
}

/// Entries in a category.
#[must_use]
pub fn by_category(category: &str) -> Vec<&'static Tutorial> {
    TUTORIALS.iter().filter(|t| t.category == category).collect()
}

/// Case-insensitive substring search over titles and descriptions.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Tutorial> {
    TUTORIALS
        .iter()
        .filter(|t| {
            contains_ignore_case(t.title, query) || contains_ignore_case(t.description, query)
        })
        .collect()
}
