// src/errors.rs
use thiserror::Error;

/// Startup errors. Any of these stops the process before the first poll.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing mandatory environment variable {0}")]
    MissingEnv(&'static str),

    #[error("poll interval must be a positive number of minutes, got {0}")]
    InvalidFreq(f64),
}

/// Why a poll produced no items. Recovered by the loop driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("api error {id} ({name}): {message}")]
    Api {
        id: i64,
        name: String,
        message: String,
    },
}

impl FetchFailure {
    /// Short label used for metric series.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchFailure::Transport(_) => "transport",
            FetchFailure::Status(_) => "status",
            FetchFailure::Malformed(_) => "malformed",
            FetchFailure::Api { .. } => "api",
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(s) => FetchFailure::Status(s.as_u16()),
            None => FetchFailure::Transport(e.to_string()),
        }
    }
}
