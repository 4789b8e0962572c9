use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The remote side refused the request. The message is shown as-is.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T, E = SubmissionError> = std::result::Result<T, E>;
