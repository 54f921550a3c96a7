//! Free-text movie reviews.
//!
//! At most one review per movie. The write path denormalizes the user's
//! current rating and the movie's display fields into the record so the
//! review list renders without touching the catalog.
//!
//! The business rule — a review requires an existing non-zero rating and
//! at least 10 characters of text — belongs to the *caller* layer, not
//! the repository; [`validate_review`] is the reusable check.

mod model;
mod repository;
mod validation;

pub use model::ReviewRecord;
pub use repository::ReviewsRepository;
pub use validation::{MIN_REVIEW_LEN, ReviewValidationError, validate_review};
