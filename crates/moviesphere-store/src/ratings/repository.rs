//! Ratings collection operations.

use std::collections::HashMap;

use super::model::RatingRecord;
use crate::Result;
use crate::kv::{KvStore, RATINGS_KEY};

/// Repository for the ratings collection.
///
/// The whole collection lives as one document under a fixed key; every
/// mutator reads the current map and writes the updated map back.
#[derive(Debug, Clone)]
pub struct RatingsRepository {
    store: KvStore,
}

impl RatingsRepository {
    /// Create a repository over the shared key-value store.
    #[must_use]
    pub const fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// The rating for a movie, 0 if unrated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, movie_id: i64) -> Result<u8> {
        let ratings = self.load().await?;
        Ok(ratings.get(&movie_id).map_or(0, |record| record.rating))
    }

    /// Set (or overwrite) the rating for a movie, stamped with the
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn set(&self, movie_id: i64, rating: u8) -> Result<()> {
        let mut ratings = self.load().await?;
        ratings.insert(movie_id, RatingRecord::now(rating));
        self.store.write(RATINGS_KEY, &ratings).await
    }

    /// Remove the rating for a movie. Removal is always explicit; no other
    /// operation deletes a rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn remove(&self, movie_id: i64) -> Result<bool> {
        let mut ratings = self.load().await?;
        let existed = ratings.remove(&movie_id).is_some();
        if existed {
            self.store.write(RATINGS_KEY, &ratings).await?;
        }
        Ok(existed)
    }

    /// Every rating, keyed by movie id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all(&self) -> Result<HashMap<i64, RatingRecord>> {
        self.load().await
    }

    async fn load(&self) -> Result<HashMap<i64, RatingRecord>> {
        Ok(self.store.read(RATINGS_KEY).await?.unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn repo() -> RatingsRepository {
        RatingsRepository::new(KvStore::in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let repo = repo().await;

        repo.set(550, 4).await.unwrap();
        assert_eq!(repo.get(550).await.unwrap(), 4);

        repo.set(550, 2).await.unwrap();
        assert_eq!(repo.get(550).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn unrated_movie_reads_as_zero() {
        let repo = repo().await;
        assert_eq!(repo.get(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn remove_deletes_only_the_target() {
        let repo = repo().await;
        repo.set(550, 4).await.unwrap();
        repo.set(551, 5).await.unwrap();

        assert!(repo.remove(550).await.unwrap());
        assert!(!repo.remove(550).await.unwrap());
        assert_eq!(repo.get(550).await.unwrap(), 0);
        assert_eq!(repo.get(551).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn all_returns_the_full_map() {
        let repo = repo().await;
        repo.set(1, 1).await.unwrap();
        repo.set(2, 5).await.unwrap();

        let all = repo.all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[&2].rating, 5);
    }
}
