//! Durable key-value storage primitive.
//!
//! One SQLite table holds every collection as a JSON document under a
//! fixed key, wrapped with a write timestamp. The contract tolerates both
//! absent keys and corrupt values: either reads back as "nothing stored",
//! never as a hard failure.

use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::Result;

/// Fixed key for the ratings collection.
pub(crate) const RATINGS_KEY: &str = "user_ratings";
/// Fixed key for the reviews collection.
pub(crate) const REVIEWS_KEY: &str = "user_reviews";
/// Fixed key for the favorites id set.
pub(crate) const FAVORITES_KEY: &str = "favorites";
/// Fixed key for the favorites display-data side table.
pub(crate) const FAVORITES_DATA_KEY: &str = "favorites_data";
/// Fixed key for the search history.
pub(crate) const SEARCH_HISTORY_KEY: &str = "search_history";

/// Every key the store owns, in the order `clear_all` removes them.
pub(crate) const ALL_KEYS: [&str; 5] = [
    RATINGS_KEY,
    REVIEWS_KEY,
    FAVORITES_KEY,
    FAVORITES_DATA_KEY,
    SEARCH_HISTORY_KEY,
];

/// SQLite-backed key-value store for user data.
///
/// Cheap to clone; clones share the same connection pool. Collection
/// mutators built on top perform read-modify-write against one key, which
/// is safe as long as a single logical caller owns the store — there is no
/// cross-process transaction discipline here.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    /// Open (or create) the store at the given database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema
    /// creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema
    /// creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_data (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                written_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Serialize `value` and store it under `key`, stamped with the
    /// current time.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database write fails.
    pub async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let serialized = serde_json::to_string(value)?;
        sqlx::query(
            r"
            INSERT INTO user_data (key, value, written_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                written_at = excluded.written_at
            ",
        )
        .bind(key)
        .bind(serialized)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Absent keys return `None`. So do corrupt values: a record that no
    /// longer parses is logged and treated as if it were never written.
    ///
    /// # Errors
    ///
    /// Returns an error only if the database query itself fails.
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let row = sqlx::query(r"SELECT value FROM user_data WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let raw: String = row.get("value");
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "stored value is corrupt, treating as absent");
                Ok(None)
            }
        }
    }

    /// Remove the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let result = sqlx::query(r"DELETE FROM user_data WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Store a raw pre-serialized value. Used by tests to plant corrupt
    /// records; import goes through [`KvStore::write`].
    #[cfg(test)]
    pub(crate) async fn write_raw(&self, key: &str, raw: &str) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO user_data (key, value, written_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                written_at = excluded.written_at
            ",
        )
        .bind(key)
        .bind(raw)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
