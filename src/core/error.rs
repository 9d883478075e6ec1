// src/core/error.rs

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Transport failures observed by a probe.
///
/// These never escape a probe: the rendered message is stored in the report
/// (`PortCheckResult::error`, `HttpsReport::https_error`).
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("timeout")]
    Timeout,
    #[error("{0}")]
    Socket(#[from] io::Error),
    #[error("{0}")]
    Connect(String),
    #[error("{0}")]
    Redirect(String),
    #[error("{0}")]
    Request(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ProbeError {
    /// Classifies a failed fetch. Timeouts collapse to `Timeout` wherever they
    /// sit in the source chain.
    pub fn from_fetch(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        let message = describe_chain(err);
        if err.is_connect() {
            Self::Connect(message)
        } else if err.is_redirect() {
            Self::Redirect(message)
        } else {
            Self::Request(message)
        }
    }
}

/// Joins an error and its sources with `": "`, skipping sources whose text is
/// already contained in the previous message.
pub fn describe_chain(err: &dyn StdError) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] io::Error);

    #[test]
    fn chain_includes_sources() {
        let err = Outer(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"));
        assert_eq!(describe_chain(&err), "error sending request: connection refused");
    }

    #[test]
    fn timeout_renders_literal() {
        assert_eq!(ProbeError::Timeout.to_string(), "timeout");
    }

    #[test]
    fn socket_error_renders_os_message() {
        let err = ProbeError::from(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(err.to_string(), "refused");
    }
}
