use thiserror::Error;

use crate::core::client::constants::{DECODE_FAILURE_MESSAGE, GENERIC_API_FAILURE_MESSAGE};

/// The primary error type for all fallible operations in this crate.
///
/// Requests fail in one of two ways: the server answered with an error status
/// ([`TvError::Api`]) or no answer arrived at all ([`TvError::Connection`]).
/// The remaining variants cover payloads that break the typed contract and
/// client construction problems.
#[derive(Debug, Error)]
pub enum TvError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the server-supplied `detail`/`message` field when present,
    /// otherwise the generic failure message.
    #[error("{message} (HTTP {status})")]
    Api {
        /// The HTTP status code returned by the server.
        status: u16,
        /// A human-readable message, never empty.
        message: String,
    },

    /// The request never received a response (DNS, refused connection, timeout, TLS).
    #[error("{message}")]
    Connection {
        /// The generic connectivity message.
        message: String,
        /// The underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// A response payload did not match the declared JSON contract.
    ///
    /// Displays as [`DECODE_FAILURE_MESSAGE`] followed by the serde detail.
    #[error("{}: {}", DECODE_FAILURE_MESSAGE, .0)]
    Json(#[from] serde_json::Error),

    /// A request body could not be serialized to JSON. Nothing was sent.
    #[error("request body could not be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client could not be constructed from the supplied configuration, or a request
    /// path was rejected before anything was sent.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl TvError {
    /// Builds an [`TvError::Api`] from a failed response body, extracting the
    /// server message when the body carries one.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = crate::core::net::server_message(body)
            .unwrap_or_else(|| GENERIC_API_FAILURE_MESSAGE.to_string());
        Self::Api { status, message }
    }

    /// The HTTP status the server answered with, if any.
    ///
    /// `None` means the server was never reached or the failure happened locally.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// A human-readable message suitable for display.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. } | Self::Connection { message, .. } => message,
            Self::Json(_) => DECODE_FAILURE_MESSAGE,
            Self::Encode(_) | Self::Url(_) | Self::Config(_) => GENERIC_API_FAILURE_MESSAGE,
        }
    }

    /// True when the server could not be reached.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// True when the server answered `404 Not Found`.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
