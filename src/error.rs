// src/error.rs

use std::path::PathBuf;

/// Errors that keep a file from being blamed at all.
#[derive(Debug, thiserror::Error)]
pub enum BlameError {
    #[error("Git not found. Make sure Git is installed and available in the PATH")]
    GitNotFound,

    #[error("git blame exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("{} is not inside a git working tree", .0.display())]
    NotInRepository(PathBuf),

    #[error("Error opening repository: {0}")]
    Repository(#[from] git2::Error),

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = BlameError> = std::result::Result<T, E>;

/// Anomalies the history parser recovers from. They never abort a parse.
///
/// `line` is the 1-based physical line of the raw text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    #[error("line {line}: expected a blame header, got {text:?}")]
    MalformedHeaderLine { line: usize, text: String },

    #[error("line {line}: result line number {value:?} is not a valid number")]
    UnparsableLineNumber { line: usize, value: String },

    #[error("line {line}: entry for {revision_id} has no content line")]
    MissingContentLine { line: usize, revision_id: String },

    #[error("line {line}: author-time {value:?} is not a valid timestamp")]
    InvalidTimestamp { line: usize, value: String },
}
