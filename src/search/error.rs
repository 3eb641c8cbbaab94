use std::time::Duration;
use thiserror::Error;

/// Fallback text when a failure carries no usable description.
pub const GENERIC_FAILURE_MESSAGE: &str = "Search failed. Please try again.";

/// Every way a search call can fail.
///
/// The UI collapses all variants into one error state; `Display` is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Connection refused, DNS failure, TLS failure and the like.
    #[error("{}", non_empty_or_generic(.0))]
    Transport(String),

    /// The service answered with a non-success status code.
    #[error("HTTP error! status: {code}{}", reason_suffix(.reason))]
    Status { code: u16, reason: Option<String> },

    /// The body was not a valid search envelope.
    #[error("Invalid response from search service: {}", non_empty_or_generic(.0))]
    Decode(String),

    /// The call did not settle before the deadline.
    #[error("Search timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The configured endpoint is not an absolute http(s) URL.
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),
}

impl SearchError {
    /// Flatten a reqwest error and its source chain into one message.
    pub(crate) fn from_transport(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return SearchError::Timeout(timeout);
        }
        if err.is_decode() {
            return SearchError::Decode(error_chain(err));
        }
        SearchError::Transport(error_chain(err))
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn non_empty_or_generic(text: &str) -> &str {
    if text.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE
    } else {
        text
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!(" {reason}"),
        _ => String::new(),
    }
}
