//! Favorites data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::MovieContext;

/// Display record for a favorited movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Movie id.
    pub movie_id: i64,
    /// Movie title, copied at add time.
    pub title: String,
    /// Poster path fragment, copied at add time.
    pub poster_path: Option<String>,
    /// Release date, copied at add time.
    pub release_date: Option<String>,
    /// When the movie was favorited. `None` on a bare record recovered
    /// from an id whose display data went missing.
    pub added_at: Option<DateTime<Utc>>,
}

impl FavoriteRecord {
    /// Build a record from live display data, stamped now.
    #[must_use]
    pub fn from_context(movie_id: i64, context: &MovieContext) -> Self {
        Self {
            movie_id,
            title: context.title.clone(),
            poster_path: context.poster_path.clone(),
            release_date: context.release_date.clone(),
            added_at: Some(Utc::now()),
        }
    }

    /// An id-only record, used when the side table has no entry.
    #[must_use]
    pub const fn bare(movie_id: i64) -> Self {
        Self {
            movie_id,
            title: String::new(),
            poster_path: None,
            release_date: None,
            added_at: None,
        }
    }
}
