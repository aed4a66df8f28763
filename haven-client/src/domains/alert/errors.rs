//! Alert flow error types
//!
//! Every failure in the SOS flow is recovered locally and surfaced as a
//! user notice; these types classify what went wrong so the notice and
//! the log line can say something useful.

use reqwest::StatusCode;
use thiserror::Error;

/// Position acquisition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The positioning service refused the request.
    #[error("location permission denied")]
    Denied,

    /// No position arrived within the query deadline.
    #[error("timed out waiting for a position")]
    Timeout,

    /// The service was unreachable or returned an unusable response.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// Alert delivery failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    /// The server answered with a non-success status.
    #[error("server rejected the alert ({status})")]
    Rejected {
        status: StatusCode,
        /// Failure detail from the response body, when the server sent one.
        message: Option<String>,
    },

    /// The request never produced a server response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl AlertError {
    /// The user-facing notice for this failure.
    pub fn notice_text(&self) -> String {
        match self {
            AlertError::Rejected { status, message } => {
                let detail = message.clone().unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
                format!("Failed to send SOS: {detail}")
            }
            AlertError::Transport(_) => "Network error sending SOS.".to_string(),
        }
    }
}

impl From<reqwest::Error> for AlertError {
    fn from(err: reqwest::Error) -> Self {
        AlertError::Transport(err.to_string())
    }
}
