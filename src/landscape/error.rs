use std::io;
use thiserror::Error;

/// Failure to retrieve the landscape document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP status ({status}): '{reason}' for requesting url: {url}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL the failed request was made against
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }
}

/// Errors raised while resolving or acting on a landscape
#[derive(Debug, Error)]
pub enum LandscapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to parse landscape configuration (json = '{text}')")]
    Parse {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown landscape id: {0}")]
    NotFound(String),

    #[error("Unknown tunnel target: {0} (supported targets: director, concourse)")]
    UnknownTarget(String),

    #[error("property '{property}' of landscape '{landscape}' is not a simple value: {value}")]
    NonScalarProperty {
        landscape: String,
        property: String,
        value: String,
    },

    #[error("failed to launch '{command_line}'")]
    ProcessLaunch {
        command_line: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command_line}' exited with status {code}")]
    ProcessExit { command_line: String, code: i32 },
}
