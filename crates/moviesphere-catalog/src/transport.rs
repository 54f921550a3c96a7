//! HTTP transport seam.
//!
//! The catalog clients issue requests through the [`Transport`] trait so
//! tests can script responses and count network calls without a server.

use async_trait::async_trait;

use crate::error::{Error, Result};

/// A raw HTTP response: status plus the full body as text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues a single GET request.
///
/// Implementations make exactly one attempt: no retries, no backoff, no
/// timeout beyond whatever the underlying stack enforces.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request against an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when no HTTP response could be obtained.
    /// Non-success statuses are *not* errors at this layer; status mapping
    /// belongs to the caller.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Production transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with its own connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport from an existing client, sharing its pool.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await.map_err(|err| {
            // The reqwest error may embed the URL (and so the API key);
            // reduce it to its kind before it can reach a log line.
            tracing::debug!(connect = err.is_connect(), timeout = err.is_timeout(), "transport failure");
            Error::Network
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|_| Error::Network)?;
        Ok(HttpResponse { status, body })
    }
}
