//! # moviesphere-store
//!
//! Local persistence for `MovieSphere` user data.
//!
//! This crate provides:
//! - Four independent collections — ratings, reviews, favorites, search
//!   history — each a repository over one durable SQLite key-value store
//! - Whole-store export to a single JSON document and import back
//! - The review-submission validation rule shared with callers
//!
//! The store owns only movie ids and display-field copies captured at
//! write time; it never references live catalog data. Corrupt stored
//! records are treated as absent, never as a hard failure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod backup;
mod context;
mod error;
pub mod favorites;
mod history;
mod kv;
pub mod ratings;
pub mod reviews;
mod store;

pub use backup::{StoreStats, UserDataBackup};
pub use context::MovieContext;
pub use error::{Error, Result};
pub use favorites::{FavoriteRecord, FavoritesRepository};
pub use history::{MAX_SEARCH_HISTORY, SearchHistoryRepository};
pub use kv::KvStore;
pub use ratings::{RatingRecord, RatingsRepository};
pub use reviews::{
    MIN_REVIEW_LEN, ReviewRecord, ReviewValidationError, ReviewsRepository, validate_review,
};
pub use store::UserDataStore;
