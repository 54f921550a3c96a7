//! The primary catalog client.
//!
//! Translates domain queries into authenticated GET requests, applies the
//! TTL response cache, and normalizes transport and HTTP failures into
//! [`Error`] kinds. One attempt per call; no retries, no backoff.

use serde::de::DeserializeOwned;
use url::Url;

use crate::cache::ResponseCache;
use crate::config::{CatalogConfig, FALLBACK_POSTER, PosterSize};
use crate::error::{Error, Result};
use crate::models::{Credits, MovieDetail, MovieListPage, MovieWithCredits};
use crate::transport::{HttpTransport, Transport};

/// Client for the primary movie catalog API.
///
/// Construct one per configuration and share it; all methods take `&self`
/// and the cache is internally synchronized.
pub struct CatalogClient<T: Transport = HttpTransport> {
    config: CatalogConfig,
    transport: T,
    cache: ResponseCache,
}

impl CatalogClient<HttpTransport> {
    /// Create a client with the production HTTP transport.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: CatalogConfig, transport: T) -> Self {
        let cache = ResponseCache::new(config.cache_ttl);
        Self {
            config,
            transport,
            cache,
        }
    }

    /// Whether the configured API key looks like a real credential.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Probe the key against the configuration endpoint.
    ///
    /// Returns `true` iff the response status indicates success. Never
    /// fails: an unconfigured key or a transport error yields `false`.
    pub async fn test_key(&self) -> bool {
        if !self.is_configured() {
            return false;
        }
        let endpoint = self.config.endpoints.configuration.clone();
        let result: Result<serde_json::Value> = self.request(&endpoint, &[], false).await;
        result.is_ok()
    }

    /// Fetch the weekly trending movies page.
    ///
    /// # Errors
    ///
    /// Any of the request-layer error kinds; see [`Error`].
    pub async fn trending(&self, page: u32) -> Result<MovieListPage> {
        let endpoint = self.config.endpoints.trending.clone();
        self.request(&endpoint, &[("page", Some(page.to_string()))], true)
            .await
    }

    /// Fetch the top-rated movies page.
    ///
    /// # Errors
    ///
    /// Any of the request-layer error kinds; see [`Error`].
    pub async fn top_rated(&self, page: u32) -> Result<MovieListPage> {
        let endpoint = self.config.endpoints.top_rated.clone();
        self.request(&endpoint, &[("page", Some(page.to_string()))], true)
            .await
    }

    /// Search movies by title.
    ///
    /// An empty or whitespace-only query returns an empty page with zero
    /// totals without touching the network.
    ///
    /// # Errors
    ///
    /// Any of the request-layer error kinds; see [`Error`].
    pub async fn search(&self, query: &str, page: u32) -> Result<MovieListPage> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(MovieListPage::empty());
        }
        let endpoint = self.config.endpoints.search.clone();
        self.request(
            &endpoint,
            &[
                ("query", Some(query.to_string())),
                ("page", Some(page.to_string())),
            ],
            true,
        )
        .await
    }

    /// Fetch full details for one movie.
    ///
    /// # Errors
    ///
    /// Any of the request-layer error kinds; see [`Error`].
    pub async fn movie_details(&self, movie_id: i64) -> Result<MovieDetail> {
        let endpoint = format!("{}/{movie_id}", self.config.endpoints.movie);
        self.request(&endpoint, &[], true).await
    }

    /// Fetch cast and crew for one movie.
    ///
    /// # Errors
    ///
    /// Any of the request-layer error kinds; see [`Error`].
    pub async fn movie_credits(&self, movie_id: i64) -> Result<Credits> {
        let endpoint = format!("{}/{movie_id}/credits", self.config.endpoints.movie);
        self.request(&endpoint, &[], true).await
    }

    /// Fetch details and credits concurrently and join them by field union.
    ///
    /// # Errors
    ///
    /// Fails if either sub-request fails; no partial value is returned.
    pub async fn movie_with_credits(&self, movie_id: i64) -> Result<MovieWithCredits> {
        let (detail, credits) =
            tokio::try_join!(self.movie_details(movie_id), self.movie_credits(movie_id))?;
        Ok(MovieWithCredits { detail, credits })
    }

    /// Resolve a poster path to a full image URL.
    ///
    /// A missing path yields the fallback placeholder reference.
    #[must_use]
    pub fn image_url(&self, path: Option<&str>, size: PosterSize) -> String {
        path.map_or_else(
            || FALLBACK_POSTER.to_string(),
            |path| {
                format!(
                    "{}{}{path}",
                    self.config.image_base_url,
                    size.path_fragment()
                )
            },
        )
    }

    /// Drop all cached responses.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of cached responses, expired entries included.
    #[must_use]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Build the fully resolved request URL: base + endpoint, API key and
    /// parameters in the query string. `None`-valued parameters are omitted.
    fn build_url(&self, endpoint: &str, params: &[(&str, Option<String>)]) -> Result<String> {
        let mut url = Url::parse(&format!("{}{endpoint}", self.config.base_url))
            .map_err(Error::parse)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.config.api_key);
            for (name, value) in params {
                if let Some(value) = value {
                    pairs.append_pair(name, value);
                }
            }
        }
        Ok(url.into())
    }

    /// Generic request: config check, cache lookup, single attempt, status
    /// mapping, parse, cache insert.
    async fn request<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, Option<String>)],
        use_cache: bool,
    ) -> Result<D> {
        if !self.is_configured() {
            return Err(Error::NotConfigured);
        }

        let url = self.build_url(endpoint, params)?;

        if use_cache
            && let Some(payload) = self.cache.get(&url)
        {
            tracing::debug!(endpoint, "cache hit");
            return serde_json::from_value(payload).map_err(Error::parse);
        }

        tracing::debug!(url = %self.redact(&url), "catalog request");
        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(Error::from_status(response.status));
        }

        let payload: serde_json::Value =
            serde_json::from_str(&response.body).map_err(Error::parse)?;
        if use_cache {
            self.cache.insert(url, payload.clone());
        }
        serde_json::from_value(payload).map_err(Error::parse)
    }

    /// Replace the API key in a URL before it reaches a log line.
    fn redact(&self, url: &str) -> String {
        if self.config.api_key.is_empty() {
            url.to_string()
        } else {
            url.replace(&self.config.api_key, "API_KEY_HIDDEN")
        }
    }
}
