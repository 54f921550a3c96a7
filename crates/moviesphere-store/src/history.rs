//! Search history.

use crate::Result;
use crate::kv::{KvStore, SEARCH_HISTORY_KEY};

/// Maximum number of remembered queries; the oldest is evicted on
/// overflow.
pub const MAX_SEARCH_HISTORY: usize = 10;

/// Repository for the search-history sequence.
///
/// Queries are stored trimmed and lowercased, most recent first, with no
/// duplicates.
#[derive(Debug, Clone)]
pub struct SearchHistoryRepository {
    store: KvStore,
}

impl SearchHistoryRepository {
    /// Create a repository over the shared key-value store.
    #[must_use]
    pub const fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Record a query.
    ///
    /// No-op when the normalized query is empty or already present;
    /// otherwise it is prepended and the list truncated to
    /// [`MAX_SEARCH_HISTORY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn add(&self, query: &str) -> Result<()> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Ok(());
        }

        let mut history = self.load().await?;
        if history.contains(&normalized) {
            return Ok(());
        }
        history.insert(0, normalized);
        history.truncate(MAX_SEARCH_HISTORY);
        self.store.write(SEARCH_HISTORY_KEY, &history).await
    }

    /// Recorded queries, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn all(&self) -> Result<Vec<String>> {
        self.load().await
    }

    /// Forget every recorded query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn clear(&self) -> Result<()> {
        self.store.delete(SEARCH_HISTORY_KEY).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .read(SEARCH_HISTORY_KEY)
            .await?
            .unwrap_or_default())
    }
}
