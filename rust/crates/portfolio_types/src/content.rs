//! Site content records and the embedded content document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::view::BadgeTone;

/// Content document compiled into the binary.
pub const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// Delivery status of a showcased project.
///
/// Anything other than the three known labels (including a missing field)
/// becomes `Unknown` so a bad record still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Production,
    Complete,
    Development,
    #[default]
    Unknown,
}

impl ProjectStatus {
    /// Badge label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Complete => "Complete",
            Self::Development => "Development",
            Self::Unknown => "Unknown",
        }
    }

    /// Badge color for this status.
    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Production => BadgeTone::Green,
            Self::Complete => BadgeTone::Blue,
            Self::Development => BadgeTone::Orange,
            Self::Unknown => BadgeTone::Neutral,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Production" => Self::Production,
            "Complete" => Self::Complete,
            "Development" => Self::Development,
            _ => Self::Unknown,
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A project in the showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Display label, unique within the list (e.g. "01")
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Technologies in display order
    pub tech: Vec<String>,
    /// Source repository URL
    pub repository: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub year: String,
    #[serde(default)]
    pub featured: bool,
}

/// A skill rendered as a labeled progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: String,
    /// Percentage, expected in 0-100
    pub proficiency: u8,
}

impl SkillEntry {
    /// Bar fill percentage, clamped to 100.
    pub fn bar_width(&self) -> u8 {
        self.proficiency.min(100)
    }

    /// Inline style for the filled part of the bar.
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.bar_width())
    }
}

/// Glyph shown on a focus-area card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusIcon {
    Brain,
    Code,
    Database,
}

/// A capability card under the skill bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub icon: FocusIcon,
    pub title: String,
    pub blurb: String,
}

/// Who the site is about and where to reach them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub headline_accent: String,
    pub tagline: String,
    pub availability: String,
    pub email: String,
    pub github_url: String,
    pub github_handle: String,
    pub linkedin_url: String,
    pub linkedin_handle: String,
    pub resume_url: String,
    pub location: String,
    pub timezone: String,
    pub footer_note: String,
    pub copyright_year: u16,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Brand text for the navigation bar as (bright, dimmed) halves.
    pub fn brand(&self) -> (String, String) {
        (
            self.first_name.to_uppercase(),
            self.last_name.to_uppercase(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub focus: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub education: Education,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub issuer: String,
    pub issuer_logo_url: String,
    pub issued_on: String,
    pub title: String,
    pub provider_note: String,
    pub verify_url: String,
}

/// Everything the page renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    pub about: About,
    pub certification: Certification,
}

impl Portfolio {
    /// Parse a content document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the content document compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Check content invariants, returning every problem found.
    ///
    /// None of these stop the page from rendering; callers decide whether
    /// to report them.
    pub fn validate(&self) -> Vec<ContentError> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                problems.push(ContentError::DuplicateProjectId(project.id.clone()));
            }
            if project.tech.is_empty() {
                problems.push(ContentError::EmptyTechList(project.id.clone()));
            }
            if project.status == ProjectStatus::Unknown {
                problems.push(ContentError::UnknownStatus(project.id.clone()));
            }
        }

        for skill in &self.skills {
            if skill.proficiency > 100 {
                problems.push(ContentError::ProficiencyOutOfRange {
                    skill: skill.name.clone(),
                    proficiency: skill.proficiency,
                });
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, status: ProjectStatus) -> ProjectEntry {
        ProjectEntry {
            id: id.to_string(),
            title: "Title".to_string(),
            subtitle: "Subtitle".to_string(),
            description: "Description".to_string(),
            tech: vec!["Rust".to_string()],
            repository: "https://example.com/repo".to_string(),
            status,
            year: "2024".to_string(),
            featured: false,
        }
    }

    fn skill(name: &str, proficiency: u8) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            category: "Backend".to_string(),
            proficiency,
        }
    }

    #[test]
    fn test_builtin_content_parses() {
        let portfolio = Portfolio::builtin().unwrap();

        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.skills.len(), 8);
        assert_eq!(portfolio.focus_areas.len(), 3);
        assert_eq!(portfolio.about.paragraphs.len(), 3);
        assert_eq!(portfolio.profile.full_name(), "Arpan Sharma");
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let portfolio = Portfolio::builtin().unwrap();

        let problems = portfolio.validate();

        assert!(problems.is_empty(), "unexpected problems: {problems:?}");
    }

    #[test]
    fn test_builtin_projects_keep_order() {
        let portfolio = Portfolio::builtin().unwrap();

        let ids: Vec<&str> = portfolio.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["01", "02", "03"]);

        let statuses: Vec<ProjectStatus> = portfolio.projects.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![
                ProjectStatus::Production,
                ProjectStatus::Complete,
                ProjectStatus::Development
            ]
        );
    }

    #[test]
    fn test_builtin_uses_only_known_statuses() {
        let portfolio = Portfolio::builtin().unwrap();

        for project in &portfolio.projects {
            assert_ne!(project.status, ProjectStatus::Unknown, "{}", project.id);
            assert_ne!(project.status.tone(), BadgeTone::Neutral);
        }
    }

    #[test]
    fn test_status_tone_mapping() {
        assert_eq!(ProjectStatus::Production.tone(), BadgeTone::Green);
        assert_eq!(ProjectStatus::Complete.tone(), BadgeTone::Blue);
        assert_eq!(ProjectStatus::Development.tone(), BadgeTone::Orange);
        assert_eq!(ProjectStatus::Unknown.tone(), BadgeTone::Neutral);
    }

    #[test]
    fn test_unrecognized_status_falls_back() {
        let raw = r#"{
            "id": "04", "title": "T", "subtitle": "S", "description": "D",
            "tech": ["Go"], "repository": "https://example.com",
            "status": "Archived", "year": "2025"
        }"#;

        let parsed: ProjectEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.status, ProjectStatus::Unknown);
        assert!(!parsed.featured);
    }

    #[test]
    fn test_missing_status_falls_back() {
        let raw = r#"{
            "id": "05", "title": "T", "subtitle": "S", "description": "D",
            "tech": [], "repository": "https://example.com", "year": "2025"
        }"#;

        let parsed: ProjectEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.status, ProjectStatus::Unknown);
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&ProjectStatus::Complete).unwrap();

        assert_eq!(json, "\"Complete\"");
    }

    #[test]
    fn test_bar_width_matches_proficiency() {
        for p in [0u8, 1, 50, 78, 95, 100] {
            assert_eq!(skill("Rust", p).bar_width(), p);
        }
        assert_eq!(skill("Rust", 82).bar_style(), "width: 82%");
    }

    #[test]
    fn test_bar_width_clamps_above_hundred() {
        let overflowing = skill("Rust", 140);

        assert_eq!(overflowing.bar_width(), 100);
        assert_eq!(overflowing.bar_style(), "width: 100%");
    }

    #[test]
    fn test_validate_reports_duplicates_and_range() {
        let portfolio = Portfolio {
            projects: vec![
                project("01", ProjectStatus::Production),
                project("01", ProjectStatus::Complete),
            ],
            skills: vec![skill("Java", 95), skill("Cobol", 120)],
            ..Default::default()
        };

        let problems = portfolio.validate();

        assert_eq!(problems.len(), 2);
        assert!(matches!(&problems[0], ContentError::DuplicateProjectId(id) if id == "01"));
        assert!(matches!(
            &problems[1],
            ContentError::ProficiencyOutOfRange { skill, proficiency: 120 } if skill == "Cobol"
        ));
    }

    #[test]
    fn test_validate_reports_unknown_status_and_empty_tech() {
        let mut bare = project("07", ProjectStatus::Unknown);
        bare.tech.clear();
        let portfolio = Portfolio {
            projects: vec![bare],
            ..Default::default()
        };

        let problems = portfolio.validate();

        assert_eq!(problems.len(), 2);
        assert!(matches!(&problems[0], ContentError::EmptyTechList(id) if id == "07"));
        assert!(matches!(&problems[1], ContentError::UnknownStatus(id) if id == "07"));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = Portfolio::from_json("{ not json").unwrap_err();

        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("malformed content document"));
    }

    #[test]
    fn test_negative_proficiency_is_rejected() {
        let raw = r#"{ "name": "Java", "category": "Backend", "proficiency": -5 }"#;

        assert!(serde_json::from_str::<SkillEntry>(raw).is_err());
    }

    #[test]
    fn test_profile_helpers() {
        let profile = Portfolio::builtin().unwrap().profile;

        assert_eq!(profile.mailto(), "mailto:arpansharmauk07@gmail.com");
        assert_eq!(
            profile.brand(),
            ("ARPAN".to_string(), "SHARMA".to_string())
        );
    }

    #[test]
    fn test_focus_icon_names() {
        let icon: FocusIcon = serde_json::from_str("\"database\"").unwrap();

        assert_eq!(icon, FocusIcon::Database);
    }
}
