use thiserror::Error;

/// A line that was recognized but could not be used. These never abort a
/// parse: the offending line is skipped and recorded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line {line}: malformed kill event: '{text}'")]
    MalformedKillLine { line: usize, text: String },

    #[error("line {line}: kill event before any InitGame, discarded")]
    OrphanKillEvent { line: usize },
}

impl LineError {
    pub fn line(&self) -> usize {
        match self {
            LineError::MalformedKillLine { line, .. } => *line,
            LineError::OrphanKillEvent { line } => *line,
        }
    }
}

/// Failures that stop a parse or a report outright.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read log input at line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write delimited report: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
