// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for cookiejar-http
//!
//! Every failure is terminal for the call that produced it. Nothing here is
//! retried or swallowed; errors carry enough context (URL, host, codes) to
//! be reported as-is by the caller.

use thiserror::Error;

/// Result type alias for cookiejar-http operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure: DNS, refused connection, TLS, premature close
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// URL scheme is neither http nor https
    #[error("Unsupported scheme '{scheme}' in {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// Header name or value cannot be sent
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Response status was not in the accepted set
    #[error("status code must be \"{}\" but actually \"{}\"", join_codes(.expected), .actual)]
    StatusMismatch { expected: Vec<u16>, actual: u16 },

    /// Body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw TCP connect failed
    #[error("Connection to {host}:{port} failed: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Timeout error
    #[error("Operation timed out after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// Body stream reported a failure
    #[error("Stream error: {0}")]
    Stream(String),

    /// Cookie persistence hook failed
    #[error("Cookie store error: {0}")]
    CookieStore(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn join_codes(codes: &[u16]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Error {
    /// Create a status mismatch error
    pub fn status_mismatch(expected: impl Into<Vec<u16>>, actual: u16) -> Self {
        Error::StatusMismatch {
            expected: expected.into(),
            actual,
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration_ms: u64) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration_ms,
        }
    }

    /// Check if the error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Io(_) | Error::Connect { .. } | Error::Timeout { .. }
        )
    }

    /// Check if this is a status assertion failure
    pub fn is_status_mismatch(&self) -> bool {
        matches!(self, Error::StatusMismatch { .. })
    }

    /// Get the offending HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::StatusMismatch { actual, .. } => Some(*actual),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mismatch_message() {
        let err = Error::status_mismatch(vec![200, 201], 404);
        assert_eq!(
            err.to_string(),
            "status code must be \"200,201\" but actually \"404\""
        );
        assert!(err.is_status_mismatch());
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_connect_error() {
        let err = Error::Connect {
            host: "127.0.0.1".to_string(),
            port: 1,
            source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
        };
        assert!(err.is_transport());
        assert!(err.to_string().starts_with("Connection to 127.0.0.1:1 failed"));
    }
}
