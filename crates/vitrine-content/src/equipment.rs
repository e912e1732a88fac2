#![forbid(unsafe_code)]

//! The equipment inventory: machines and tools available in the workshop.
//!
//! Entries are static, already-validated data; the rest of the workspace
//! consumes them as-is. Filtering and search are pure functions over the
//! table.

use crate::contains_ignore_case;
use crate::resource::{ResourceKind, ResourceLink};

/// Current availability of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentStatus {
    /// Ready for use.
    Available,
    /// In use or reserved.
    Busy,
    /// Out of service.
    Maintenance,
}

impl EquipmentStatus {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Maintenance => "maintenance",
        }
    }
}

/// One inventory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equipment {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Inventory category.
    pub category: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Quantity on hand, as displayed.
    pub quantity: &'static str,
    /// Whether an induction is required before use.
    pub induction_required: bool,
    /// Availability.
    pub status: EquipmentStatus,
    /// Headline specifications.
    pub specs: &'static [&'static str],
    /// Related material.
    pub resources: &'static [ResourceLink],
}

/// The inventory, in display order.
pub const EQUIPMENT: &[Equipment] = &[
    Equipment {
        id: "bambu-p1s",
        name: "Bambu Lab P1S 3D Printer",
        category: "3D Printing",
        description: "High-speed CoreXY 3D printer with enclosed chamber for creating FDM printed 3D objects.",
        quantity: "9 units",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Build Volume: 256×256×256mm",
            "Multi-material AMS",
            "Materials: PLA, PETG, TPU",
            "STEP files",
        ],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "Bambu Studio Setup",
                url: "https://www.youtube.com/watch?v=8TQCRVS72Us",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "3D Printing Guidelines",
                url: "#",
            },
        ],
    },
    Equipment {
        id: "bambu-h2d",
        name: "Bambu Lab H2D Multi-Tool",
        category: "3D Printing",
        description: "Multi-function fabrication tool with 3D printing, laser engraving, vinyl cutting, and pen plotting capabilities.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "3D Print + Laser Module",
            "Vinyl Cutter Attachment",
            "Pen Plotter Module",
            "Multi-material AMS",
            "STEP files",
        ],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Video,
                title: "H2D Multi-Tool Overview",
                url: "https://www.youtube.com/watch?v=idOY8ebZ25Q",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "3D Printing Guidelines",
                url: "#",
            },
        ],
    },
    Equipment {
        id: "stratasys-j55",
        name: "Stratasys J55 Prime Polyjet",
        category: "3D Printing",
        description: "Professional full-colour Polyjet 3D printer for high-detail prototypes and realistic models.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Full Colour Printing",
            "Water-soluble Support",
            "PolyJet Resin",
            "3mf files",
        ],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Guide,
                title: "Export 3mf from Keyshot",
                url: "https://manual.keyshot.com/manual/models-tab/export/export-formats/",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "3D Printing Guidelines",
                url: "#",
            },
        ],
    },
    Equipment {
        id: "stratasys-f170",
        name: "Stratasys F170 FDM Printer",
        category: "3D Printing",
        description: "Industrial FDM 3D printer for reliable, repeatable prototyping with engineering materials.",
        quantity: "2 units",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Build Volume: 254×254×254mm",
            "Materials: ABS, TPU",
            "Chemical-Soluble Support Material",
        ],
        resources: &[ResourceLink {
            kind: ResourceKind::Documentation,
            title: "3D Printing Guidelines",
            url: "#",
        }],
    },
    Equipment {
        id: "sunlu-pen",
        name: "Sunlu SL300 3D Pen",
        category: "3D Printing",
        description: "Handheld 3D printing pen for freeform drawing, repairs, and quick prototyping.",
        quantity: "Multiple",
        induction_required: false,
        status: EquipmentStatus::Available,
        specs: &[
            "Temperature: 160-230°C",
            "Filament: 1.75mm PLA/ABS",
            "OLED Display",
        ],
        resources: &[],
    },
    Equipment {
        id: "revopoint-inspire",
        name: "Revopoint Inspire 3D Scanner",
        category: "3D Scanning",
        description: "Affordable handheld 3D scanner for quick digitisation of small to medium objects.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Accuracy: 0.2mm",
            "Scan Speed: 18fps",
            "Working Distance: 150-400mm",
            "Small Object scanning",
            "Face Scanning",
            "Colour Scanning",
        ],
        resources: &[
            ResourceLink {
                kind: ResourceKind::Guide,
                title: "Inspire Quick Start",
                url: "https://download.revopoint3d.com/wp-content/uploads/download/INSPIRE%20Quick%20Start%20Guide%20-%200911.pdf",
            },
            ResourceLink {
                kind: ResourceKind::Documentation,
                title: "Revo Scan Software",
                url: "https://www.revopoint3d.com/pages/support-download",
            },
        ],
    },
    Equipment {
        id: "artec-eva",
        name: "Artec Eva 3D Scanner",
        category: "3D Scanning",
        description: "Professional structured-light 3D scanner for high-precision reverse engineering and metrology.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Accuracy: 0.1mm",
            "3D Resolution: 0.5mm",
            "Capture Speed: 16fps",
            "Artec Studio Software",
            "Medium-Large Object scanning",
            "Colour Scanning",
        ],
        resources: &[],
    },
    Equipment {
        id: "metal-laser",
        name: "Epilog Fibermark Laser Etcher",
        category: "Laser & CNC",
        description: "Fiber laser system for permanent marking and etching on metal surfaces.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "50W Fiber Laser",
            "Marking Area: 112×112mm",
            "Materials: Metals, Plastics",
            "Epilog Software Suite",
        ],
        resources: &[],
    },
    Equipment {
        id: "cnc-router",
        name: "Desktop CNC Router",
        category: "Laser & CNC",
        description: "Desktop CNC router for milling, engraving, and cutting various materials.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Work Area: 300×200×65mm",
            "Spindle: 300W",
            "Materials: Wood, Acrylic, PCB, Soft Metals",
        ],
        resources: &[],
    },
    Equipment {
        id: "workstations",
        name: "High-Performance Workstations",
        category: "Computing",
        description: "Powerful desktop workstations for CAD, rendering, simulation, and development work.",
        quantity: "6 units",
        induction_required: false,
        status: EquipmentStatus::Available,
        specs: &[
            "High-end GPUs",
            "32GB+ RAM",
            "NVMe Storage",
            "Software: Fusion 360, SolidWorks, Adobe CC, Clo3D, Unreal Engine, Arduino IDE, Optitex, SketchUp",
        ],
        resources: &[],
    },
    Equipment {
        id: "soldering-stations",
        name: "Soldering Stations",
        category: "Electronics",
        description: "Professional temperature-controlled soldering stations for electronics assembly and repair.",
        quantity: "6 units",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &[
            "Temperature: 200-450°C",
            "Power: 70W",
            "Digital Display",
            "ESD Safe",
        ],
        resources: &[],
    },
    Equipment {
        id: "oscilloscope",
        name: "Digital Oscilloscope",
        category: "Electronics",
        description: "Digital storage oscilloscope for analysing electronic signals and circuit debugging.",
        quantity: "1 unit",
        induction_required: true,
        status: EquipmentStatus::Available,
        specs: &["2 Channels", "25MHz Bandwidth", "500MS/s Sample Rate"],
        resources: &[],
    },
];

/// Distinct categories, in first-appearance order.
#[must_use]
pub fn categories() -> Vec<&'static str> {
    let mut out = Vec::new();
    for item in EQUIPMENT {
        if !out.contains(&item.category) {
            out.push(item.category);
        }
    }
    out
}

/// Entries in a category.
#[must_use]
pub fn by_category(category: &str) -> Vec<&'static Equipment> {
    EQUIPMENT.iter().filter(|e| e.category == category).collect()
}

/// Entries with a given status.
#[must_use]
pub fn by_status(status: EquipmentStatus) -> Vec<&'static Equipment> {
    EQUIPMENT.iter().filter(|e| e.status == status).collect()
}

/// Case-insensitive substring search over names and descriptions.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Equipment> {
    EQUIPMENT
        .iter()
        .filter(|e| {
            contains_ignore_case(e.name, query) || contains_ignore_case(e.description, query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in EQUIPMENT.iter().enumerate() {
            for b in &EQUIPMENT[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn categories_cover_every_entry() {
        let cats = categories();
        for item in EQUIPMENT {
            assert!(cats.contains(&item.category));
        }
        // First-appearance order puts 3D Printing first.
        assert_eq!(cats[0], "3D Printing");
    }

    #[test]
    fn category_filter_partitions() {
        let total: usize = categories().iter().map(|c| by_category(c).len()).sum();
        assert_eq!(total, EQUIPMENT.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let hits = search("BAMBU");
        assert!(hits.iter().any(|e| e.id == "bambu-p1s"));
        assert!(hits.iter().any(|e| e.id == "bambu-h2d"));
    }

    #[test]
    fn search_matches_descriptions() {
        let hits = search("reverse engineering");
        assert!(hits.iter().any(|e| e.id == "artec-eva"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(search("").len(), EQUIPMENT.len());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search("zzz-no-such-machine").is_empty());
    }

    #[test]
    fn status_filter() {
        assert_eq!(
            by_status(EquipmentStatus::Available).len(),
            EQUIPMENT.len()
        );
        assert!(by_status(EquipmentStatus::Maintenance).is_empty());
    }

    #[test]
    fn status_labels() {
        assert_eq!(EquipmentStatus::Available.label(), "available");
        assert_eq!(EquipmentStatus::Busy.label(), "busy");
        assert_eq!(EquipmentStatus::Maintenance.label(), "maintenance");
    }
}
