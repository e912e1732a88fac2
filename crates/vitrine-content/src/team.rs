#![forbid(unsafe_code)]

//! The team roster.

use crate::contains_ignore_case;

/// One staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Job title.
    pub title: &'static str,
    /// Short biography.
    pub bio: &'static str,
    /// Areas of expertise.
    pub skills: &'static [&'static str],
    /// Contact address, when published.
    pub email: Option<&'static str>,
}

/// The roster, in display order.
pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "clive",
        name: "Clive",
        title: "Senior Technician",
        bio: "Clive oversees workshop operations and safety protocols, bringing extensive experience in electronics and digital fabrication. As Laser Safety Officer, he ensures all equipment is maintained to the highest standards and mentors students through complex projects.",
        skills: &[
            "Workshop Management",
            "Electronics",
            "Creative Coding",
            "Microcontrollers",
            "3D Printing & Scanning",
            "Laser Safety Officer",
        ],
        email: Some("clive@zeroonetwo.ac.uk"),
    },
    TeamMember {
        id: "linda",
        name: "Linda",
        title: "Scientific Officer",
        bio: "Linda leads technical research initiatives at the intersection of fashion and technology. Her expertise spans traditional textile craft and cutting-edge digital fabrication, supporting innovative projects in wearable technology and smart materials.",
        skills: &[
            "Technical Led Research",
            "Fashion",
            "Embroidery",
            "Digital Loom",
            "Digital Fashion",
        ],
        email: Some("linda@zeroonetwo.ac.uk"),
    },
    TeamMember {
        id: "gary",
        name: "Gary",
        title: "Senior Technician",
        bio: "Gary specializes in animation, software development, and immersive technologies. He manages the high-performance computing resources and VR equipment, helping students realise ambitious digital projects from concept to completion.",
        skills: &["Animation", "Software", "High Powered PCs", "VR", "Digital Fashion"],
        email: Some("gary@zeroonetwo.ac.uk"),
    },
    TeamMember {
        id: "callum",
        name: "Callum",
        title: "Technician",
        bio: "Callum brings hands-on expertise in 3D printing, metalwork, and jewellery-making. As Laser Safety Officer, he ensures safe operation of the metal laser etcher while supporting students in precision manufacturing and silversmithing projects.",
        skills: &[
            "3D Printers",
            "Metal Laser Etcher",
            "Metalwork",
            "Silversmithing",
            "Laser Safety Officer",
        ],
        email: Some("callum@zeroonetwo.ac.uk"),
    },
];

/// Members whose name or skills match a case-insensitive query.
#[must_use]
pub fn search(query: &str) -> Vec<&'static TeamMember> {
    TEAM.iter()
        .filter(|m| {
            contains_ignore_case(m.name, query)
                || m.skills.iter().any(|s| contains_ignore_case(s, query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in TEAM.iter().enumerate() {
            for b in &TEAM[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_member_has_skills() {
        for m in TEAM {
            assert!(!m.skills.is_empty(), "{} has no skills listed", m.name);
        }
    }

    #[test]
    fn search_by_skill() {
        let hits = search("laser safety");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn search_by_name() {
        let hits = search("linda");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "linda");
    }
}
