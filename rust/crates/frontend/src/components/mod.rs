//! Reusable UI components.

mod cursor;
mod footer;
mod icon;
mod navigation;
mod project_card;
mod skill_bar;

pub use cursor::Cursor;
pub use footer::Footer;
pub use icon::{Glyph, Icon};
pub use navigation::{Navigation, NavigationProps};
pub use project_card::ProjectCard;
pub use skill_bar::SkillBar;
