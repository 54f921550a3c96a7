//! Favorite movies.
//!
//! Membership is an id set; display data lives in a side table keyed by
//! the same ids. Add and remove always touch both so the two stay
//! consistent.

mod model;
mod repository;

pub use model::FavoriteRecord;
pub use repository::FavoritesRepository;
