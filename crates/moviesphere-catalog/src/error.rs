//! Error types for catalog operations.

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the catalog clients.
///
/// Error messages never contain the API key: transport and parse failures
/// are reduced to their kind so nothing derived from the request URL can
/// leak into logs or user-facing strings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API key is missing or still a placeholder.
    #[error("API key is missing or not configured")]
    NotConfigured,

    /// Upstream rejected the API key (HTTP 401).
    #[error("invalid API key: upstream rejected the request")]
    Unauthorized,

    /// The requested resource does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// Any other non-success HTTP status.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code returned by the upstream API.
        status: u16,
    },

    /// The request never produced an HTTP response (DNS, connect, TLS).
    #[error("network error: upstream catalog unreachable")]
    Network,

    /// The response body did not match the expected shape.
    #[error("malformed response: {detail}")]
    Parse {
        /// What failed to parse, without echoing the raw body.
        detail: String,
    },

    /// An error reported in-band by the backup catalog.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl Error {
    /// Map a non-success HTTP status to its error kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::Http { status },
        }
    }

    /// Creates a parse error from any deserialization failure.
    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse {
            detail: err.to_string(),
        }
    }
}
