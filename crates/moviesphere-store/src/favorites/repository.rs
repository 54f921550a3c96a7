//! Favorites collection operations.

use std::collections::HashMap;

use super::model::FavoriteRecord;
use crate::Result;
use crate::context::MovieContext;
use crate::kv::{FAVORITES_DATA_KEY, FAVORITES_KEY, KvStore};

/// Repository for the favorites id set and its display-data side table.
#[derive(Debug, Clone)]
pub struct FavoritesRepository {
    store: KvStore,
}

impl FavoritesRepository {
    /// Create a repository over the shared key-value store.
    #[must_use]
    pub const fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Whether the movie is a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn contains(&self, movie_id: i64) -> Result<bool> {
        Ok(self.ids().await?.contains(&movie_id))
    }

    /// Add a movie to the favorites.
    ///
    /// Returns `false` without mutating anything if the movie is already a
    /// member; on success the display side table is upserted as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn add(&self, movie_id: i64, context: &MovieContext) -> Result<bool> {
        let mut ids = self.ids().await?;
        if ids.contains(&movie_id) {
            return Ok(false);
        }
        ids.push(movie_id);
        self.store.write(FAVORITES_KEY, &ids).await?;

        let mut data = self.data().await?;
        data.insert(movie_id, FavoriteRecord::from_context(movie_id, context));
        self.store.write(FAVORITES_DATA_KEY, &data).await?;
        Ok(true)
    }

    /// Remove a movie from the favorites.
    ///
    /// Returns `false` without mutating anything if the movie is not a
    /// member; on success the side-table entry is deleted as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn remove(&self, movie_id: i64) -> Result<bool> {
        let mut ids = self.ids().await?;
        let Some(position) = ids.iter().position(|id| *id == movie_id) else {
            return Ok(false);
        };
        ids.remove(position);
        self.store.write(FAVORITES_KEY, &ids).await?;

        let mut data = self.data().await?;
        data.remove(&movie_id);
        self.store.write(FAVORITES_DATA_KEY, &data).await?;
        Ok(true)
    }

    /// Every favorite, in insertion order.
    ///
    /// Each element is the side-table record, or an id-only record when
    /// display data is missing (e.g. a backup imported without it).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all(&self) -> Result<Vec<FavoriteRecord>> {
        let ids = self.ids().await?;
        let data = self.data().await?;
        Ok(ids
            .into_iter()
            .map(|id| {
                data.get(&id)
                    .cloned()
                    .unwrap_or_else(|| FavoriteRecord::bare(id))
            })
            .collect())
    }

    /// Number of favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<usize> {
        Ok(self.ids().await?.len())
    }

    async fn ids(&self) -> Result<Vec<i64>> {
        Ok(self.store.read(FAVORITES_KEY).await?.unwrap_or_default())
    }

    async fn data(&self) -> Result<HashMap<i64, FavoriteRecord>> {
        Ok(self
            .store
            .read(FAVORITES_DATA_KEY)
            .await?
            .unwrap_or_default())
    }
}
