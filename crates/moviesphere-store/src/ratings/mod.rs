//! Per-movie star ratings.

mod model;
mod repository;

pub use model::RatingRecord;
pub use repository::RatingsRepository;
