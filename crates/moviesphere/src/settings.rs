//! Environment-resolved application settings.
//!
//! The core crates take constructed configuration objects; this module is
//! the only place that reads the environment.

use std::env;
use std::path::PathBuf;

use moviesphere_catalog::CatalogConfig;

/// Database file name under the data directory.
const DATABASE_FILE: &str = "user_data.db";

/// Resolved application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Primary catalog API key (`TMDB_API_KEY`).
    pub tmdb_api_key: String,
    /// Primary catalog base URL override (`TMDB_BASE_URL`).
    pub tmdb_base_url: Option<String>,
    /// Image CDN base URL override (`TMDB_IMAGE_BASE_URL`).
    pub tmdb_image_base_url: Option<String>,
    /// Backup catalog API key (`OMDB_API_KEY`).
    pub omdb_api_key: String,
    /// Backup catalog base URL override (`OMDB_BASE_URL`).
    pub omdb_base_url: Option<String>,
    /// Directory holding the user-data database
    /// (`MOVIESPHERE_DATA_DIR`, defaulting under the platform data dir).
    pub data_dir: PathBuf,
}

impl Settings {
    /// Resolve settings from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = env::var_os("MOVIESPHERE_DATA_DIR").map_or_else(
            || {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("moviesphere")
            },
            PathBuf::from,
        );

        Self {
            tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            tmdb_base_url: env::var("TMDB_BASE_URL").ok(),
            tmdb_image_base_url: env::var("TMDB_IMAGE_BASE_URL").ok(),
            omdb_api_key: env::var("OMDB_API_KEY").unwrap_or_default(),
            omdb_base_url: env::var("OMDB_BASE_URL").ok(),
            data_dir,
        }
    }

    /// Catalog configuration with any base-URL overrides applied.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::new(self.tmdb_api_key.clone());
        if let Some(base_url) = &self.tmdb_base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(image_base_url) = &self.tmdb_image_base_url {
            config = config.with_image_base_url(image_base_url.clone());
        }
        config
    }

    /// Path of the user-data database file.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
