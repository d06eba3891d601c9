use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ExploreResult<T> = Result<T, ExploreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExploreError {
    #[error("Bad range: end {end} precedes begin {begin} or exceeds buffer length {len}")]
    BadRange { begin: usize, end: usize, len: usize },

    #[error("Empty distribution: operated-on range has zero length")]
    EmptyDistribution,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExploreError {
    pub fn status(&self) -> Status {
        match self {
            ExploreError::BadRange { .. } => Status::BadRange,
            ExploreError::EmptyDistribution => Status::EmptyDistribution,
            ExploreError::Config(_) => Status::Config,
        }
    }
}

impl From<config::ConfigError> for ExploreError {
    fn from(err: config::ConfigError) -> Self {
        ExploreError::Config(err.to_string())
    }
}

/// Numeric status returned to callers that branch on codes rather than
/// matching on [`ExploreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    BadRange,
    EmptyDistribution,
    Config,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::BadRange => 1,
            Status::EmptyDistribution => 2,
            Status::Config => 3,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl<T> From<&ExploreResult<T>> for Status {
    fn from(result: &ExploreResult<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}
