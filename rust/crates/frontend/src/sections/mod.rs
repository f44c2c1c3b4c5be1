//! Page sections, rendered top to bottom in this order.

mod about;
mod certification;
mod contact;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use certification::CertificationSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
