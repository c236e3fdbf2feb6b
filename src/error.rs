// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for source-switch
//!
//! The rewrite pipeline itself never fails: mismatched or invalid domain
//! configuration resolves to "do not rewrite". These errors cover the
//! surrounding layers (transport dispatch, config loading).

use thiserror::Error;

/// Result type alias for source-switch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for source-switch
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Dispatch of a (rewritten) request failed
    #[error("Dispatch to {url} failed: {reason}")]
    Dispatch { url: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a dispatch error
    pub fn dispatch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Dispatch {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Dispatch { .. })
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Dispatch { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Attach the URL being dispatched to a failure
    fn with_url(self, url: &str) -> Result<T>;

    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn with_url(self, url: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            Error::Other(reason) => Error::dispatch(url, reason),
            other => other,
        })
    }

    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Other(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error() {
        let err = Error::dispatch("https://api.alt.example.com/v1", "connection refused");

        assert!(err.is_network());
        assert_eq!(err.url(), Some("https://api.alt.example.com/v1"));
    }

    #[test]
    fn test_config_error_has_no_url() {
        let err = Error::config("missing core source");
        assert!(!err.is_network());
        assert_eq!(err.url(), None);
    }

    #[test]
    fn test_with_url_context() {
        let result: std::result::Result<(), &str> = Err("reset by peer");
        let err = result.with_url("https://downloads.alt.example.com").unwrap_err();

        match err {
            Error::Dispatch { url, reason } => {
                assert_eq!(url, "https://downloads.alt.example.com");
                assert_eq!(reason, "reset by peer");
            }
            other => panic!("Expected Dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_context() {
        let result: std::result::Result<(), Error> = Err(Error::config("missing core source"));
        let err = result.context("loading selector").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading selector: Configuration error: missing core source"
        );
    }
}
