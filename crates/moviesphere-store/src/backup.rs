//! Backup document for whole-store export and import.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::favorites::FavoriteRecord;
use crate::ratings::RatingRecord;
use crate::reviews::ReviewRecord;

/// The export file format: every collection plus an export timestamp.
///
/// Field names are the wire format — a backup written by one installation
/// imports into any other. On import, each `Some` field replaces its
/// entire target collection; `None` fields leave theirs untouched, and
/// unknown extra fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataBackup {
    /// Ratings keyed by movie id.
    #[serde(default)]
    pub ratings: Option<HashMap<i64, RatingRecord>>,
    /// Reviews keyed by movie id.
    #[serde(default)]
    pub reviews: Option<HashMap<i64, ReviewRecord>>,
    /// Favorite movie ids, in insertion order.
    #[serde(default)]
    pub favorites: Option<Vec<i64>>,
    /// Display side table for the favorites.
    #[serde(default, rename = "favoritesData")]
    pub favorites_data: Option<HashMap<i64, FavoriteRecord>>,
    /// Search history, most recent first.
    #[serde(default, rename = "searchHistory")]
    pub search_history: Option<Vec<String>>,
    /// When the backup was produced, as an ISO timestamp.
    #[serde(default, rename = "exportDate")]
    pub export_date: String,
}

/// Counts of the stored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of rated movies.
    pub ratings_count: usize,
    /// Number of reviews.
    pub reviews_count: usize,
    /// Number of favorites.
    pub favorites_count: usize,
    /// Number of remembered search queries.
    pub search_history_count: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_none() {
        let backup: UserDataBackup =
            serde_json::from_str(r#"{"favorites": [1, 2]}"#).unwrap();

        assert_eq!(backup.favorites, Some(vec![1, 2]));
        assert!(backup.ratings.is_none());
        assert!(backup.search_history.is_none());
        assert!(backup.export_date.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let backup: UserDataBackup = serde_json::from_str(
            r#"{"searchHistory": ["blade runner"], "someFutureField": 42}"#,
        )
        .unwrap();
        assert_eq!(backup.search_history.unwrap().len(), 1);
    }
}
