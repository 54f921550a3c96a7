//! Catalog client configuration.
//!
//! Everything the client needs is supplied here at construction time;
//! the client itself performs no ambient environment lookups.

use std::time::Duration;

/// Default TMDB API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default TMDB image base URL.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Default response cache lifetime.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Reference returned for movies without a poster.
pub const FALLBACK_POSTER: &str = "images/no-poster.jpg";

/// Keys that are placeholders rather than real credentials.
const PLACEHOLDER_KEYS: [&str; 3] = ["YOUR_TMDB_API_KEY_HERE", "your_api_key_here", "API_KEY_HERE"];

/// Prefixes that mark a key as "looks like a placeholder" (checked
/// case-insensitively).
const PLACEHOLDER_PREFIXES: [&str; 5] = ["your", "api", "key", "here", "placeholder"];

/// API endpoint paths, relative to the base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Weekly trending movies.
    pub trending: String,
    /// All-time top rated movies.
    pub top_rated: String,
    /// Movie title search.
    pub search: String,
    /// Movie details root (`{movie}/{id}` and `{movie}/{id}/credits`).
    pub movie: String,
    /// API configuration/metadata, used for key validation.
    pub configuration: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            trending: "/trending/movie/week".to_string(),
            top_rated: "/movie/top_rated".to_string(),
            search: "/search/movie".to_string(),
            movie: "/movie".to_string(),
            configuration: "/configuration".to_string(),
        }
    }
}

/// Named poster sizes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    /// 342px wide.
    Small,
    /// 500px wide.
    #[default]
    Medium,
    /// 780px wide.
    Large,
}

impl PosterSize {
    /// Parse a size name. Unknown names fall back to [`PosterSize::Medium`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::Medium,
        }
    }

    /// Path fragment for this size on the image CDN.
    #[must_use]
    pub const fn path_fragment(self) -> &'static str {
        match self {
            Self::Small => "/w342",
            Self::Medium => "/w500",
            Self::Large => "/w780",
        }
    }
}

/// Configuration for the primary catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API base URL.
    pub base_url: String,
    /// Image CDN base URL.
    pub image_base_url: String,
    /// API key, passed as a query parameter on every request.
    pub api_key: String,
    /// Endpoint path table.
    pub endpoints: Endpoints,
    /// How long a cached response stays valid.
    pub cache_ttl: Duration,
}

impl CatalogConfig {
    /// Create a configuration with default URLs, endpoints and TTL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: api_key.into(),
            endpoints: Endpoints::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the image CDN base URL.
    #[must_use]
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Override the cache lifetime.
    #[must_use]
    pub const fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Whether the API key looks like a real credential.
    ///
    /// True iff the key is at least 20 characters, is not one of the known
    /// placeholder strings, and does not start with a placeholder word.
    /// Pure; performs no I/O.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let key = self.api_key.as_str();
        if key.len() < 20 {
            return false;
        }
        if PLACEHOLDER_KEYS.contains(&key) {
            return false;
        }
        let lowered = key.to_lowercase();
        !PLACEHOLDER_PREFIXES
            .iter()
            .any(|prefix| lowered.starts_with(prefix))
    }
}
