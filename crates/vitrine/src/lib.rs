#![forbid(unsafe_code)]

//! The Vitrine application shell.
//!
//! # Role in Vitrine
//! This crate assembles the workshop showcase out of the lower layers:
//! `vitrine-core` drives the animation, `vitrine-style` the accent theme,
//! `vitrine-content` the catalogs. It owns the routes, the authored
//! sections, and the [`App`] that turns scroll and time into frames.
//!
//! # How it fits in the system
//! A renderer embeds one [`App`], feeds it scroll positions, frame ticks,
//! and navigation, and draws whatever [`App::frame`] returns.

/// The application shell.
pub mod app;
/// The contact form's submission path.
pub mod enquiry;
/// Page composition per route.
pub mod page;
/// The navigable routes.
pub mod route;
/// Section definitions.
pub mod section;
/// The authored sections.
pub mod sections;

pub use app::{App, Frame, SectionFrame};
pub use page::Page;
pub use route::Route;
pub use section::{SectionDef, SectionKind};
