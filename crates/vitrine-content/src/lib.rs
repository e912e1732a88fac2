#![forbid(unsafe_code)]

//! Static workshop catalogs for Vitrine.
//!
//! # Role in Vitrine
//! Everything the showcase presents — machines, tutorials, the team — is
//! static, already-validated data. This crate holds the tables and the
//! pure filter/search helpers the pages use; it validates and transforms
//! nothing at runtime.

/// The equipment inventory.
pub mod equipment;
/// External resource links.
pub mod resource;
/// The team roster.
pub mod team;
/// The tutorial catalog.
pub mod tutorials;

pub use equipment::{EQUIPMENT, Equipment, EquipmentStatus};
pub use resource::{ResourceKind, ResourceLink};
pub use team::{TEAM, TeamMember};
pub use tutorials::{Difficulty, TUTORIALS, Tutorial};

/// Case-insensitive substring match; an empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
