use thiserror::Error;

use crate::fuzzy::RuleSetId;

#[derive(Error, Debug)]
pub enum FuzzyError {
    #[error("Invalid triangle shape: ({a}, {b}, {c}) must satisfy a <= b <= c")]
    InvalidShape { a: f32, b: f32, c: f32 },

    #[error("Invalid rule: missing {0}")]
    InvalidRule(&'static str),

    #[error("Unknown rule set: {0}")]
    UnknownRuleSet(RuleSetId),

    #[error("Unknown term '{term}' for variable '{variable}'")]
    UnknownTerm { variable: String, term: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
