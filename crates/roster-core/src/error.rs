//! Error type for roster-core.
//!
//! A duplicate id is not an error; see [`AddOutcome`](crate::AddOutcome).

/// Failures that can surface from the roster shell or config loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write to output sink: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
