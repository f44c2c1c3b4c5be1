//! Content errors.

use thiserror::Error;

/// Problems found while loading or checking site content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content document is not valid JSON or does not match the schema.
    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate project id `{0}`")]
    DuplicateProjectId(String),

    #[error("skill `{skill}` has proficiency {proficiency}, expected 0-100")]
    ProficiencyOutOfRange { skill: String, proficiency: u8 },

    #[error("project `{0}` lists no technologies")]
    EmptyTechList(String),

    #[error("project `{0}` has an unrecognized status")]
    UnknownStatus(String),
}
