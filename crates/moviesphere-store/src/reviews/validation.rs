//! Review submission validation.

/// Minimum review length after trimming.
pub const MIN_REVIEW_LEN: usize = 10;

/// Why a review submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewValidationError {
    /// No non-zero rating exists for the movie.
    RatingRequired,
    /// Trimmed text is shorter than [`MIN_REVIEW_LEN`].
    TooShort,
}

impl ReviewValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::RatingRequired => "Please select a rating before saving your review",
            Self::TooShort => "Review must be at least 10 characters long",
        }
    }
}

impl std::fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ReviewValidationError {}

/// Validate a review submission against the caller-layer business rule.
///
/// `rating` is the user's current rating for the movie (0 = unrated).
///
/// # Errors
///
/// [`ReviewValidationError::RatingRequired`] when the movie is unrated;
/// [`ReviewValidationError::TooShort`] when the trimmed text is under the
/// minimum length.
pub fn validate_review(text: &str, rating: u8) -> Result<(), ReviewValidationError> {
    if rating == 0 {
        return Err(ReviewValidationError::RatingRequired);
    }
    if text.trim().chars().count() < MIN_REVIEW_LEN {
        return Err(ReviewValidationError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrated_movie_refuses_a_review() {
        assert_eq!(
            validate_review("A perfectly fine review.", 0),
            Err(ReviewValidationError::RatingRequired)
        );
    }

    #[test]
    fn short_text_is_refused_even_when_rated() {
        assert_eq!(
            validate_review("too short", 4),
            Err(ReviewValidationError::TooShort)
        );
        // Whitespace does not count toward the minimum.
        assert_eq!(
            validate_review("   abc   ", 4),
            Err(ReviewValidationError::TooShort)
        );
    }

    #[test]
    fn rated_movie_with_enough_text_passes() {
        assert_eq!(validate_review("Ten chars!", 1), Ok(()));
        assert_eq!(validate_review("A longer, considered review.", 5), Ok(()));
    }

    #[test]
    fn rating_is_checked_before_length() {
        assert_eq!(
            validate_review("x", 0),
            Err(ReviewValidationError::RatingRequired)
        );
    }
}
