#![forbid(unsafe_code)]

//! The authored sections, one module per section. Pinned sections define
//! their scroll-scrubbed track sets; reveal sections define their one-shot
//! entrances.

pub mod build;
pub mod catalog;
pub mod collaboration;
pub mod contact;
pub mod craft;
pub mod hero;
pub mod notes;
pub mod studio;
pub mod work;
