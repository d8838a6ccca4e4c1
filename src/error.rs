use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}

/// Reasons a single match line is rejected.
///
/// These never abort a run: the line is skipped, reported, and the next
/// line is processed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LineError {
    #[error("invalid line, teams have to be separated by a comma , for example team1 3, team2 4")]
    NoSeparatorFound,

    #[error(
        "invalid line, team names cannot contain commas and numbers in the following format ' 1234, ' (found {fragments} fragments)"
    )]
    AmbiguousSeparator { fragments: usize },

    #[error("invalid line, could not find a team score in '{fragment}'")]
    ScoreNotFound { fragment: String },

    #[error("invalid line, score '{digits}' is not a valid number: {source}")]
    ScoreNotNumeric {
        digits: String,
        source: ParseIntError,
    },
}

impl LineError {
    /// Create a score-not-found error for the given half of a line
    pub fn score_not_found(fragment: impl Into<String>) -> Self {
        Self::ScoreNotFound {
            fragment: fragment.into(),
        }
    }

    /// Short machine-friendly name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            LineError::NoSeparatorFound => "no_separator_found",
            LineError::AmbiguousSeparator { .. } => "ambiguous_separator",
            LineError::ScoreNotFound { .. } => "score_not_found",
            LineError::ScoreNotNumeric { .. } => "score_not_numeric",
        }
    }
}
