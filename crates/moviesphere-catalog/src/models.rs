//! Wire types for the primary catalog API.
//!
//! Field names mirror the upstream JSON; everything the upstream may omit
//! or null out is an `Option`, validated at the parse boundary rather than
//! propagated as missing fields.

use serde::{Deserialize, Serialize};

/// A movie as returned by list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Stable upstream identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Poster path fragment, joined with the image base URL for display.
    pub poster_path: Option<String>,
    /// Release date as an ISO `YYYY-MM-DD` string.
    pub release_date: Option<String>,
    /// Average community vote, 0–10.
    #[serde(default)]
    pub vote_average: f64,
}

/// One page of movie results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListPage {
    /// 1-based page number.
    pub page: i64,
    /// Movies on this page.
    pub results: Vec<MovieSummary>,
    /// Total pages available upstream.
    pub total_pages: i64,
    /// Total matching movies across all pages.
    pub total_results: i64,
}

impl MovieListPage {
    /// An empty result set, used for blank search queries.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// A genre tag on a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Upstream genre id.
    pub id: i64,
    /// Genre name, in the order the upstream lists them.
    pub name: String,
}

/// Full movie details from the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Stable upstream identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Plot overview.
    #[serde(default)]
    pub overview: String,
    /// Poster path fragment.
    pub poster_path: Option<String>,
    /// Release date as an ISO `YYYY-MM-DD` string.
    pub release_date: Option<String>,
    /// Average community vote, 0–10.
    #[serde(default)]
    pub vote_average: f64,
    /// Runtime in minutes, when known.
    pub runtime: Option<i64>,
    /// Ordered genre list.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// A cast entry: performer and the character they play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    /// Performer name.
    pub name: String,
    /// Character name.
    #[serde(default)]
    pub character: String,
}

/// A crew entry: person and their job on the production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    /// Person name.
    pub name: String,
    /// Job title, e.g. `Director`.
    #[serde(default)]
    pub job: String,
}

/// Cast and crew for one movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    /// Ordered cast list.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Ordered crew list.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// The crew member whose job is `Director`, if any.
    #[must_use]
    pub fn director(&self) -> Option<&CrewMember> {
        self.crew.iter().find(|member| member.job == "Director")
    }
}

/// Details and credits joined by movie id.
///
/// Constructed from two independent fetches; the union is shallow, detail
/// fields plus a `credits` field.
#[derive(Debug, Clone, Serialize)]
pub struct MovieWithCredits {
    /// Detail fields, flattened into the top level on serialization.
    #[serde(flatten)]
    pub detail: MovieDetail,
    /// Cast and crew.
    pub credits: Credits,
}

impl MovieWithCredits {
    /// The movie's director, if credited.
    #[must_use]
    pub fn director(&self) -> Option<&CrewMember> {
        self.credits.director()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn summary_tolerates_null_poster_and_date() {
        let movie: MovieSummary = serde_json::from_value(serde_json::json!({
            "id": 550,
            "title": "Fight Club",
            "poster_path": null,
            "release_date": null,
            "vote_average": 8.4,
        }))
        .unwrap();

        assert_eq!(movie.id, 550);
        assert!(movie.poster_path.is_none());
        assert!(movie.release_date.is_none());
    }

    #[test]
    fn missing_required_field_is_a_parse_failure() {
        let result: Result<MovieSummary, _> = serde_json::from_value(serde_json::json!({
            "title": "No id",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn director_is_located_by_job() {
        let credits = Credits {
            cast: vec![],
            crew: vec![
                CrewMember {
                    name: "A. Editor".to_string(),
                    job: "Editor".to_string(),
                },
                CrewMember {
                    name: "D. Fincher".to_string(),
                    job: "Director".to_string(),
                },
            ],
        };
        assert_eq!(credits.director().unwrap().name, "D. Fincher");
    }

    #[test]
    fn joined_movie_serializes_as_a_field_union() {
        let joined = MovieWithCredits {
            detail: MovieDetail {
                id: 550,
                title: "Fight Club".to_string(),
                overview: String::new(),
                poster_path: None,
                release_date: Some("1999-10-15".to_string()),
                vote_average: 8.4,
                runtime: Some(139),
                genres: vec![],
            },
            credits: Credits {
                cast: vec![],
                crew: vec![],
            },
        };

        let value = serde_json::to_value(&joined).unwrap();
        assert_eq!(value["id"], 550);
        assert_eq!(value["runtime"], 139);
        assert!(value["credits"].is_object());
    }
}
