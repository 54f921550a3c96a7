//! Review data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's review of one movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Movie this review belongs to.
    pub movie_id: i64,
    /// Review text, trimmed at write time.
    pub text: String,
    /// The user's rating at the moment the review was saved.
    pub rating: u8,
    /// Movie title, copied at write time.
    pub movie_title: String,
    /// Poster path fragment, copied at write time.
    pub poster_path: Option<String>,
    /// Release year derived from the copied release date.
    pub release_year: Option<i32>,
    /// When the review was first written.
    pub created_at: DateTime<Utc>,
    /// When the review was last updated.
    pub updated_at: DateTime<Utc>,
}
