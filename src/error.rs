// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for headerscan
//!
//! Header extraction and compliance evaluation cannot fail; every error here
//! comes from obtaining the response or from presenting the result.

use thiserror::Error;

/// Result type alias for headerscan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for headerscan
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Only http and https targets can be scanned
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Timeout error
    #[error("Operation timed out after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
        url: Option<String>,
    },

    /// Could not connect (DNS, refused, TLS handshake)
    #[error("Failed to connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    /// Redirect limit exceeded
    #[error("Too many redirects from {url} (limit {limit})")]
    TooManyRedirects { url: String, limit: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a timeout error with URL
    pub fn timeout_with_url(
        operation: impl Into<String>,
        duration_ms: u64,
        url: impl Into<String>,
    ) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration_ms,
            url: Some(url.into()),
        }
    }

    /// Create a connection error
    pub fn connect(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Connect {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if no response could be obtained
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Timeout { .. }
                | Error::Connect { .. }
                | Error::TooManyRedirects { .. }
        )
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Timeout { url: Some(u), .. } => Some(u),
            Error::Connect { url, .. } => Some(url),
            Error::TooManyRedirects { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}

/// Join an error and its sources: `outer: inner: root`
pub(crate) fn describe_chain(err: &dyn std::error::Error) -> String {
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
