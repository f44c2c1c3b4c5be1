//! Core types for the portfolio site.
//!
//! This crate defines the site content (projects, skills, profile and the
//! rest of the page copy), the embedded content document, and the small
//! pieces of view state the frontend owns: pointer position and the mobile
//! menu flag. Nothing here touches the browser, so all of it is testable
//! on the host.

mod content;
mod error;
mod view;

pub use content::{
    About, BUILTIN_CONTENT, Certification, Education, FocusArea, FocusIcon, Portfolio, Profile,
    ProjectEntry, ProjectStatus, SkillEntry,
};
pub use error::ContentError;
pub use view::{BadgeTone, MenuState, NAV_ITEMS, NavItem, PointerPosition};
