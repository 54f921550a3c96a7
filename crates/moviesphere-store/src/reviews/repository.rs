//! Reviews collection operations.

use std::collections::HashMap;

use chrono::Utc;

use super::model::ReviewRecord;
use crate::Result;
use crate::context::MovieContext;
use crate::kv::{KvStore, RATINGS_KEY, REVIEWS_KEY};
use crate::ratings::RatingRecord;

/// Repository for the reviews collection.
#[derive(Debug, Clone)]
pub struct ReviewsRepository {
    store: KvStore,
}

impl ReviewsRepository {
    /// Create a repository over the shared key-value store.
    #[must_use]
    pub const fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// The review for a movie, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, movie_id: i64) -> Result<Option<ReviewRecord>> {
        let reviews = self.load().await?;
        Ok(reviews.get(&movie_id).cloned())
    }

    /// Write (or overwrite) the review for a movie.
    ///
    /// Trims the text, snapshots the user's current rating, and copies the
    /// display fields out of `context`. An overwrite keeps the original
    /// `created_at` and bumps `updated_at`.
    ///
    /// Validation (rating present, text long enough) is the caller's job —
    /// see [`crate::reviews::validate_review`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn set(
        &self,
        movie_id: i64,
        text: &str,
        context: &MovieContext,
    ) -> Result<ReviewRecord> {
        let rating = self.current_rating(movie_id).await?;
        let mut reviews = self.load().await?;

        let now = Utc::now();
        let created_at = reviews
            .get(&movie_id)
            .map_or(now, |existing| existing.created_at);

        let record = ReviewRecord {
            movie_id,
            text: text.trim().to_string(),
            rating,
            movie_title: context.title.clone(),
            poster_path: context.poster_path.clone(),
            release_year: context.release_year(),
            created_at,
            updated_at: now,
        };
        reviews.insert(movie_id, record.clone());
        self.store.write(REVIEWS_KEY, &reviews).await?;
        Ok(record)
    }

    /// Delete the review for a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn remove(&self, movie_id: i64) -> Result<bool> {
        let mut reviews = self.load().await?;
        let existed = reviews.remove(&movie_id).is_some();
        if existed {
            self.store.write(REVIEWS_KEY, &reviews).await?;
        }
        Ok(existed)
    }

    /// Every review, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all(&self) -> Result<Vec<ReviewRecord>> {
        let reviews = self.load().await?;
        let mut list: Vec<ReviewRecord> = reviews.into_values().collect();
        list.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(list)
    }

    /// Number of stored reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }

    async fn load(&self) -> Result<HashMap<i64, ReviewRecord>> {
        Ok(self.store.read(REVIEWS_KEY).await?.unwrap_or_default())
    }

    /// The user's current rating for the movie, 0 if unrated. Read from
    /// the ratings collection so the review snapshot matches what the
    /// ratings repository would report.
    async fn current_rating(&self, movie_id: i64) -> Result<u8> {
        let ratings: HashMap<i64, RatingRecord> =
            self.store.read(RATINGS_KEY).await?.unwrap_or_default();
        Ok(ratings.get(&movie_id).map_or(0, |record| record.rating))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ratings::RatingsRepository;

    async fn repos() -> (RatingsRepository, ReviewsRepository) {
        let store = KvStore::in_memory().await.unwrap();
        (
            RatingsRepository::new(store.clone()),
            ReviewsRepository::new(store),
        )
    }

    fn context() -> MovieContext {
        MovieContext::new(
            "Fight Club",
            Some("/p.jpg".to_string()),
            Some("1999-10-15".to_string()),
        )
    }

    #[tokio::test]
    async fn set_snapshots_rating_and_display_fields() {
        let (ratings, reviews) = repos().await;
        ratings.set(550, 4).await.unwrap();

        let record = reviews
            .set(550, "  An unsettling, brilliant film.  ", &context())
            .await
            .unwrap();

        assert_eq!(record.text, "An unsettling, brilliant film.");
        assert_eq!(record.rating, 4);
        assert_eq!(record.movie_title, "Fight Club");
        assert_eq!(record.release_year, Some(1999));
    }

    #[tokio::test]
    async fn overwrite_keeps_created_at() {
        let (ratings, reviews) = repos().await;
        ratings.set(550, 4).await.unwrap();

        let first = reviews.set(550, "First impressions.", &context()).await.unwrap();
        let second = reviews
            .set(550, "Second thoughts, revised.", &context())
            .await
            .unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(reviews.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn snapshot_rating_does_not_track_later_changes() {
        let (ratings, reviews) = repos().await;
        ratings.set(550, 5).await.unwrap();
        reviews.set(550, "Loved every minute.", &context()).await.unwrap();

        ratings.set(550, 2).await.unwrap();

        let stored = reviews.get(550).await.unwrap().unwrap();
        assert_eq!(stored.rating, 5);
    }

    #[tokio::test]
    async fn all_sorts_most_recently_updated_first() {
        let (ratings, reviews) = repos().await;
        ratings.set(1, 3).await.unwrap();
        ratings.set(2, 3).await.unwrap();

        reviews.set(1, "Written earlier today.", &context()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        reviews.set(2, "Written a moment later.", &context()).await.unwrap();

        let all = reviews.all().await.unwrap();
        assert_eq!(all[0].movie_id, 2);
        assert_eq!(all[1].movie_id, 1);
    }

    #[tokio::test]
    async fn remove_reports_membership() {
        let (ratings, reviews) = repos().await;
        ratings.set(550, 4).await.unwrap();
        reviews.set(550, "Gone soon enough.", &context()).await.unwrap();

        assert!(reviews.remove(550).await.unwrap());
        assert!(!reviews.remove(550).await.unwrap());
        assert!(reviews.get(550).await.unwrap().is_none());
    }
}
