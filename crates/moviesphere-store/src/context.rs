//! Denormalized display-field capture.

use serde::{Deserialize, Serialize};

/// Display fields captured from live catalog data at write time.
///
/// Reviews and favorites copy these so their lists can render without a
/// catalog fetch. The store never holds a reference to a live catalog
/// record — only the movie id and these copied strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieContext {
    /// Movie title.
    pub title: String,
    /// Poster path fragment.
    pub poster_path: Option<String>,
    /// Release date as an ISO `YYYY-MM-DD` string.
    pub release_date: Option<String>,
}

impl MovieContext {
    /// Create a context from its display parts.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        poster_path: Option<String>,
        release_date: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            poster_path,
            release_date,
        }
    }

    /// Release year parsed from the leading `YYYY` of the release date.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_ref()?.get(..4)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_is_parsed_from_the_date_prefix() {
        let context = MovieContext::new("X", None, Some("1999-10-15".to_string()));
        assert_eq!(context.release_year(), Some(1999));
    }

    #[test]
    fn release_year_is_none_for_absent_or_garbled_dates() {
        assert_eq!(MovieContext::new("X", None, None).release_year(), None);
        assert_eq!(
            MovieContext::new("X", None, Some("soon".to_string())).release_year(),
            None
        );
    }
}
