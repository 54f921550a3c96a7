//! The user-data store facade.

use chrono::Utc;

use crate::Result;
use crate::backup::{StoreStats, UserDataBackup};
use crate::favorites::FavoritesRepository;
use crate::history::SearchHistoryRepository;
use crate::kv::{
    ALL_KEYS, FAVORITES_DATA_KEY, FAVORITES_KEY, KvStore, RATINGS_KEY, REVIEWS_KEY,
    SEARCH_HISTORY_KEY,
};
use crate::ratings::RatingsRepository;
use crate::reviews::ReviewsRepository;

/// All four user-data collections over one durable store, plus the bulk
/// export/import operations that span them.
#[derive(Debug, Clone)]
pub struct UserDataStore {
    kv: KvStore,
    ratings: RatingsRepository,
    reviews: ReviewsRepository,
    favorites: FavoritesRepository,
    history: SearchHistoryRepository,
}

impl UserDataStore {
    /// Open (or create) the store at the given database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema
    /// creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        Ok(Self::from_kv(KvStore::new(database_path).await?))
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema
    /// creation fails.
    pub async fn in_memory() -> Result<Self> {
        Ok(Self::from_kv(KvStore::in_memory().await?))
    }

    fn from_kv(kv: KvStore) -> Self {
        Self {
            ratings: RatingsRepository::new(kv.clone()),
            reviews: ReviewsRepository::new(kv.clone()),
            favorites: FavoritesRepository::new(kv.clone()),
            history: SearchHistoryRepository::new(kv.clone()),
            kv,
        }
    }

    /// The ratings collection.
    #[must_use]
    pub const fn ratings(&self) -> &RatingsRepository {
        &self.ratings
    }

    /// The reviews collection.
    #[must_use]
    pub const fn reviews(&self) -> &ReviewsRepository {
        &self.reviews
    }

    /// The favorites collection.
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesRepository {
        &self.favorites
    }

    /// The search-history collection.
    #[must_use]
    pub const fn history(&self) -> &SearchHistoryRepository {
        &self.history
    }

    /// Serialize every collection into one pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if a database read fails.
    pub async fn export_json(&self) -> Result<String> {
        let backup = UserDataBackup {
            ratings: Some(self.kv.read(RATINGS_KEY).await?.unwrap_or_default()),
            reviews: Some(self.kv.read(REVIEWS_KEY).await?.unwrap_or_default()),
            favorites: Some(self.kv.read(FAVORITES_KEY).await?.unwrap_or_default()),
            favorites_data: Some(self.kv.read(FAVORITES_DATA_KEY).await?.unwrap_or_default()),
            search_history: Some(self.kv.read(SEARCH_HISTORY_KEY).await?.unwrap_or_default()),
            export_date: Utc::now().to_rfc3339(),
        };
        Ok(serde_json::to_string_pretty(&backup)?)
    }

    /// Import a backup document.
    ///
    /// Each collection present in the document replaces its stored
    /// counterpart *wholesale* — this is not an item-level merge, so
    /// importing an older backup over newer data loses the newer items.
    /// Collections absent from the document are left untouched.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Parse`] when the input is not valid JSON of the
    /// backup shape; otherwise a database error.
    pub async fn import_json(&self, json: &str) -> Result<()> {
        let backup: UserDataBackup = serde_json::from_str(json)?;

        if let Some(ratings) = backup.ratings {
            self.kv.write(RATINGS_KEY, &ratings).await?;
        }
        if let Some(reviews) = backup.reviews {
            self.kv.write(REVIEWS_KEY, &reviews).await?;
        }
        if let Some(favorites) = backup.favorites {
            self.kv.write(FAVORITES_KEY, &favorites).await?;
        }
        if let Some(favorites_data) = backup.favorites_data {
            self.kv.write(FAVORITES_DATA_KEY, &favorites_data).await?;
        }
        if let Some(search_history) = backup.search_history {
            self.kv.write(SEARCH_HISTORY_KEY, &search_history).await?;
        }
        Ok(())
    }

    /// Remove every known key, emptying all four collections.
    ///
    /// # Errors
    ///
    /// Returns an error if a database write fails.
    pub async fn clear_all(&self) -> Result<()> {
        for key in ALL_KEYS {
            self.kv.delete(key).await?;
        }
        Ok(())
    }

    /// Counts of all collections.
    ///
    /// # Errors
    ///
    /// Returns an error if a database read fails.
    pub async fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            ratings_count: self.ratings.all().await?.len(),
            reviews_count: self.reviews.count().await?,
            favorites_count: self.favorites.count().await?,
            search_history_count: self.history.all().await?.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::context::MovieContext;

    fn context(title: &str) -> MovieContext {
        MovieContext::new(title, None, Some("2010-07-16".to_string()))
    }

    #[tokio::test]
    async fn import_of_malformed_json_is_a_parse_error() {
        let store = UserDataStore::in_memory().await.unwrap();
        let err = store.import_json("{definitely not json").await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn import_replaces_present_collections_wholesale() {
        let store = UserDataStore::in_memory().await.unwrap();
        store.ratings().set(1, 5).await.unwrap();
        store.ratings().set(2, 3).await.unwrap();
        store.history().add("kept untouched").await.unwrap();

        // A backup carrying only ratings: replaces ratings, leaves history.
        store
            .import_json(r#"{"ratings": {"7": {"rating": 2, "updated_at": "2026-01-01T00:00:00Z"}}}"#)
            .await
            .unwrap();

        let ratings = store.ratings().all().await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[&7].rating, 2);
        assert_eq!(store.history().all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn clear_all_empties_every_collection() {
        let store = UserDataStore::in_memory().await.unwrap();
        store.ratings().set(1, 4).await.unwrap();
        store.favorites().add(1, &context("Inception")).await.unwrap();
        store.history().add("inception").await.unwrap();

        store.clear_all().await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.ratings_count, 0);
        assert_eq!(stats.favorites_count, 0);
        assert_eq!(stats.search_history_count, 0);
    }

    #[tokio::test]
    async fn stats_count_each_collection() {
        let store = UserDataStore::in_memory().await.unwrap();
        store.ratings().set(1, 4).await.unwrap();
        store.ratings().set(2, 5).await.unwrap();
        store.reviews().set(1, "Dreams within dreams.", &context("Inception")).await.unwrap();
        store.favorites().add(1, &context("Inception")).await.unwrap();
        store.history().add("inception").await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(
            stats,
            StoreStats {
                ratings_count: 2,
                reviews_count: 1,
                favorites_count: 1,
                search_history_count: 1,
            }
        );
    }
}
