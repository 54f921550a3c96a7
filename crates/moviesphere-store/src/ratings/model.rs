//! Rating data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's star rating for one movie.
///
/// Keyed by movie id in the ratings collection; a rating of 0 (or an
/// absent record) means "unrated".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Stars, 1–5.
    pub rating: u8,
    /// When the rating was last set.
    pub updated_at: DateTime<Utc>,
}

impl RatingRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn now(rating: u8) -> Self {
        Self {
            rating,
            updated_at: Utc::now(),
        }
    }
}
