//! Backup catalog client (OMDB).
//!
//! A deliberately smaller surface than the primary client: no cache, no
//! endpoint table, and a different in-band error convention — the upstream
//! reports failure with `"Response": "False"` plus an `Error` string
//! instead of HTTP status codes.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Transport};

/// Default OMDB base URL.
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com";

const PLACEHOLDER_KEY: &str = "YOUR_OMDB_API_KEY_HERE";

/// A movie in OMDB search results.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovie {
    /// Display title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year, as the upstream formats it.
    #[serde(rename = "Year", default)]
    pub year: String,
    /// IMDb identifier, usable with [`OmdbClient::details`].
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// Poster image URL, `"N/A"` when absent.
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Full movie record from the OMDB detail lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbDetail {
    /// Display title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year.
    #[serde(rename = "Year", default)]
    pub year: String,
    /// Full plot text (`plot=full` is always requested).
    #[serde(rename = "Plot", default)]
    pub plot: String,
    /// Credited director(s).
    #[serde(rename = "Director", default)]
    pub director: String,
    /// IMDb rating as formatted upstream.
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// OMDB search results.
#[derive(Debug, Clone, Default)]
pub struct OmdbSearchResult {
    /// Matching movies; empty on any failure.
    pub movies: Vec<OmdbMovie>,
    /// Total matches reported upstream.
    pub total_results: u64,
}

/// Wire envelope shared by search and detail responses.
#[derive(Debug, Deserialize)]
struct OmdbEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<OmdbMovie>,
    #[serde(rename = "totalResults", default)]
    total_results: String,
}

/// Client for the backup catalog.
pub struct OmdbClient<T: Transport = HttpTransport> {
    base_url: String,
    api_key: String,
    transport: T,
}

impl OmdbClient<HttpTransport> {
    /// Create a client with the production HTTP transport.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, HttpTransport::new())
    }
}

impl<T: Transport> OmdbClient<T> {
    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            api_key: api_key.into(),
            transport,
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a usable key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_KEY
    }

    /// Search movies by title.
    ///
    /// Never fails: an unconfigured key, a blank query, a transport error,
    /// or an upstream `"Response": "False"` all yield an empty result.
    pub async fn search(&self, query: &str) -> OmdbSearchResult {
        let query = query.trim();
        if !self.is_configured() || query.is_empty() {
            return OmdbSearchResult::default();
        }

        let envelope = match self.get(&[("s", query)]).await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::debug!(%err, "backup catalog search failed");
                return OmdbSearchResult::default();
            }
        };

        if envelope.response != "True" {
            return OmdbSearchResult::default();
        }
        OmdbSearchResult {
            movies: envelope.search,
            total_results: envelope.total_results.parse().unwrap_or(0),
        }
    }

    /// Look up one movie by IMDb id, full plot included.
    ///
    /// # Errors
    ///
    /// [`Error::NotConfigured`] without a usable key or id;
    /// [`Error::Upstream`] carrying the upstream message when the response
    /// is `"False"`; otherwise the usual network/parse kinds.
    pub async fn details(&self, imdb_id: &str) -> Result<OmdbDetail> {
        if !self.is_configured() || imdb_id.is_empty() {
            return Err(Error::NotConfigured);
        }

        let url = self.build_url(&[("i", imdb_id), ("plot", "full")])?;
        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(Error::from_status(response.status));
        }

        let envelope: OmdbEnvelope =
            serde_json::from_str(&response.body).map_err(Error::parse)?;
        if envelope.response == "False" {
            let message = envelope
                .error
                .unwrap_or_else(|| "Movie not found.".to_string());
            return Err(Error::Upstream(message));
        }
        serde_json::from_str(&response.body).map_err(Error::parse)
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<OmdbEnvelope> {
        let url = self.build_url(params)?;
        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(Error::from_status(response.status));
        }
        serde_json::from_str(&response.body).map_err(Error::parse)
    }

    fn build_url(&self, params: &[(&str, &str)]) -> Result<String> {
        let mut url = Url::parse(&self.base_url).map_err(Error::parse)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        Ok(url.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::transport::HttpResponse;

    struct FixedTransport {
        response: Result<HttpResponse>,
        requests: Mutex<Vec<String>>,
    }

    impl FixedTransport {
        fn ok(body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status: 200,
                    body: body.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn status(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(Error::Network),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(url.to_string());
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(_) => Err(Error::Network),
            }
        }
    }

    const SEARCH_BODY: &str = r#"{
        "Response": "True",
        "totalResults": "2",
        "Search": [
            {"Title": "Blade Runner", "Year": "1982", "imdbID": "tt0083658", "Poster": "N/A"},
            {"Title": "Blade Runner 2049", "Year": "2017", "imdbID": "tt1856101", "Poster": "N/A"}
        ]
    }"#;

    #[tokio::test]
    async fn search_parses_results() {
        let client = OmdbClient::with_transport("omdbkey1", FixedTransport::ok(SEARCH_BODY));

        let result = client.search("blade runner").await;

        assert_eq!(result.total_results, 2);
        assert_eq!(result.movies[1].imdb_id, "tt1856101");
    }

    #[tokio::test]
    async fn search_is_empty_when_unconfigured_or_blank() {
        let unconfigured =
            OmdbClient::with_transport(PLACEHOLDER_KEY, FixedTransport::ok(SEARCH_BODY));
        assert!(unconfigured.search("blade runner").await.movies.is_empty());
        assert!(unconfigured.transport.requests.lock().unwrap().is_empty());

        let configured = OmdbClient::with_transport("omdbkey1", FixedTransport::ok(SEARCH_BODY));
        assert!(configured.search("  ").await.movies.is_empty());
    }

    #[tokio::test]
    async fn search_swallows_transport_failures() {
        let client = OmdbClient::with_transport("omdbkey1", FixedTransport::failing());
        let result = client.search("blade runner").await;
        assert!(result.movies.is_empty());
        assert_eq!(result.total_results, 0);
    }

    #[tokio::test]
    async fn details_surfaces_the_upstream_message() {
        let body = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let client = OmdbClient::with_transport("omdbkey1", FixedTransport::ok(body));

        let err = client.details("tt0000000").await.unwrap_err();
        assert!(matches!(err, Error::Upstream(ref msg) if msg == "Incorrect IMDb ID."));
    }

    #[tokio::test]
    async fn details_requests_the_full_plot() {
        let body = r#"{"Response": "True", "Title": "Blade Runner", "Year": "1982",
                       "Plot": "A blade runner must pursue replicants.",
                       "Director": "Ridley Scott", "imdbRating": "8.1",
                       "imdbID": "tt0083658"}"#;
        let client = OmdbClient::with_transport("omdbkey1", FixedTransport::ok(body));

        let detail = client.details("tt0083658").await.unwrap();

        assert_eq!(detail.director, "Ridley Scott");
        let requests = client.transport.requests.lock().unwrap();
        assert!(requests[0].contains("plot=full"));
        assert!(requests[0].contains("i=tt0083658"));
    }

    #[tokio::test]
    async fn details_maps_http_failures_before_parsing() {
        let server_error = OmdbClient::with_transport(
            "omdbkey1",
            FixedTransport::status(500, "<html>Internal Server Error</html>"),
        );
        assert!(matches!(
            server_error.details("tt0083658").await.unwrap_err(),
            Error::Http { status: 500 }
        ));

        let unauthorized = OmdbClient::with_transport("omdbkey1", FixedTransport::status(401, ""));
        assert!(matches!(
            unauthorized.details("tt0083658").await.unwrap_err(),
            Error::Unauthorized
        ));
    }

    #[tokio::test]
    async fn details_without_key_or_id_is_not_configured() {
        let client = OmdbClient::with_transport("", FixedTransport::ok("{}"));
        assert!(matches!(
            client.details("tt0083658").await.unwrap_err(),
            Error::NotConfigured
        ));

        let client = OmdbClient::with_transport("omdbkey1", FixedTransport::ok("{}"));
        assert!(matches!(
            client.details("").await.unwrap_err(),
            Error::NotConfigured
        ));
    }
}
