use thiserror::Error;

/// Failure of a backend call. The retry loop surfaces the last one observed.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("request to {path} timed out")]
    Timeout { path: String },

    #[error("transport error on {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} on {path}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    #[error("malformed response from {path}: {reason}")]
    MalformedResponse { path: String, reason: String },

    #[error("invalid backend url: {0}")]
    InvalidUrl(String),

    #[error("invalid retry policy: {0}")]
    InvalidPolicy(String),
}

impl BackendError {
    /// Builds the error for a failed reqwest call, keeping timeouts distinct.
    pub(crate) fn from_reqwest(path: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            BackendError::Timeout {
                path: path.to_string(),
            }
        } else {
            BackendError::Transport {
                path: path.to_string(),
                source,
            }
        }
    }

    /// True for timeouts, connection failures and 5xx; these are the cold-backend symptoms.
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Timeout { .. } | BackendError::Transport { .. } => true,
            BackendError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
