//! Errors raised while fetching a page from the WordPress API.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed request to the posts or categories endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not complete (connect, DNS, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },
    /// The body or a required header could not be understood.
    #[error("failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },
}

/// Category of a [`FetchError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    HttpStatus,
    Parse,
}

impl FetchError {
    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } => FetchErrorKind::Network,
            Self::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            Self::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    pub(crate) fn parse(url: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            url: url.to_string(),
            message: message.into(),
        }
    }
}
