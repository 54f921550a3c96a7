//! Command handlers.
//!
//! This layer owns the couplings the core crates deliberately leave to
//! their caller: recording successful searches in the history, fetching
//! display context before annotating a movie, and enforcing the
//! review-submission rule before a review ever reaches the store.

use std::path::Path;

use anyhow::Context as _;
use moviesphere_catalog::{
    CatalogClient, MovieListPage, MovieSummary, OmdbClient, PosterSize,
};
use moviesphere_store::{MovieContext, UserDataStore, validate_review};

/// The wired-up application: one catalog client, one backup client, one
/// user-data store.
pub struct App {
    catalog: CatalogClient,
    backup_catalog: OmdbClient,
    store: UserDataStore,
}

impl App {
    /// Wire the application together.
    pub const fn new(
        catalog: CatalogClient,
        backup_catalog: OmdbClient,
        store: UserDataStore,
    ) -> Self {
        Self {
            catalog,
            backup_catalog,
            store,
        }
    }

    /// Print a page of trending movies.
    pub async fn trending(&self, page: u32) -> anyhow::Result<()> {
        let movies = self.catalog.trending(page).await?;
        self.print_page("Trending this week", &movies);
        Ok(())
    }

    /// Print a page of top-rated movies.
    pub async fn top_rated(&self, page: u32) -> anyhow::Result<()> {
        let movies = self.catalog.top_rated(page).await?;
        self.print_page("Top rated", &movies);
        Ok(())
    }

    /// Search the catalog and remember the query.
    pub async fn search(&self, query: &str, page: u32) -> anyhow::Result<()> {
        let movies = self.catalog.search(query, page).await?;
        if !movies.results.is_empty() {
            self.store.history().add(query).await?;
        }
        self.print_page(&format!("Results for \"{}\"", query.trim()), &movies);
        Ok(())
    }

    /// Search the backup catalog. Degrades to an empty list, never fails.
    pub async fn backup_search(&self, query: &str) {
        let result = self.backup_catalog.search(query).await;
        println!("Backup catalog: {} result(s)", result.total_results);
        for movie in &result.movies {
            println!("  {}  {} ({})", movie.imdb_id, movie.title, movie.year);
        }
    }

    /// Look one movie up in the backup catalog by IMDb id.
    pub async fn imdb(&self, imdb_id: &str) -> anyhow::Result<()> {
        let detail = self.backup_catalog.details(imdb_id).await?;
        println!("{} ({})", detail.title, detail.year);
        println!("Directed by {}", detail.director);
        println!("IMDb rating: {}", detail.imdb_rating);
        println!("\n{}", detail.plot);
        Ok(())
    }

    /// Print full details for a movie, merged with the user's own data.
    pub async fn show(&self, movie_id: i64) -> anyhow::Result<()> {
        let movie = self.catalog.movie_with_credits(movie_id).await?;
        let detail = &movie.detail;

        println!("{} ({})", detail.title, year_of(detail.release_date.as_deref()));
        if let Some(runtime) = detail.runtime {
            println!("{runtime} min");
        }
        if !detail.genres.is_empty() {
            let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
            println!("{}", names.join(", "));
        }
        if let Some(director) = movie.director() {
            println!("Directed by {}", director.name);
        }
        println!("Community vote: {:.1}/10", detail.vote_average);
        println!(
            "Poster: {}",
            self.catalog
                .image_url(detail.poster_path.as_deref(), PosterSize::Large)
        );
        if !detail.overview.is_empty() {
            println!("\n{}", detail.overview);
        }
        if !movie.credits.cast.is_empty() {
            println!("\nCast:");
            for member in movie.credits.cast.iter().take(5) {
                println!("  {} as {}", member.name, member.character);
            }
        }

        // The user's own annotations, read-only, merged at render time.
        let rating = self.store.ratings().get(movie_id).await?;
        if rating > 0 {
            println!("\nYour rating: {}", stars(rating));
        }
        if let Some(review) = self.store.reviews().get(movie_id).await? {
            println!("Your review: {}", review.text);
        }
        if self.store.favorites().contains(movie_id).await? {
            println!("In your favorites");
        }
        Ok(())
    }

    /// Set the user's rating for a movie.
    pub async fn rate(&self, movie_id: i64, rating: u8) -> anyhow::Result<()> {
        self.store.ratings().set(movie_id, rating).await?;
        println!("Rated {movie_id}: {}", stars(rating));
        Ok(())
    }

    /// Remove the user's rating for a movie.
    pub async fn unrate(&self, movie_id: i64) -> anyhow::Result<()> {
        if self.store.ratings().remove(movie_id).await? {
            println!("Rating removed");
        } else {
            println!("Movie {movie_id} was not rated");
        }
        Ok(())
    }

    /// Write the user's review for a movie.
    ///
    /// Refused unless the movie already carries a non-zero rating and the
    /// trimmed text is long enough; display context is captured from the
    /// catalog at write time.
    pub async fn review(&self, movie_id: i64, text: &str) -> anyhow::Result<()> {
        let rating = self.store.ratings().get(movie_id).await?;
        validate_review(text, rating)?;

        let detail = self.catalog.movie_details(movie_id).await?;
        let context = MovieContext::new(
            detail.title,
            detail.poster_path,
            detail.release_date,
        );
        self.store.reviews().set(movie_id, text, &context).await?;
        println!("Review saved");
        Ok(())
    }

    /// Print every review, most recently updated first.
    pub async fn reviews(&self) -> anyhow::Result<()> {
        let reviews = self.store.reviews().all().await?;
        if reviews.is_empty() {
            println!("No reviews yet");
            return Ok(());
        }
        for review in reviews {
            println!(
                "{} ({})  {}",
                review.movie_title,
                review.release_year.map_or_else(|| "?".to_string(), |y| y.to_string()),
                stars(review.rating),
            );
            println!("  {}\n", review.text);
        }
        Ok(())
    }

    /// Delete the review for a movie.
    pub async fn unreview(&self, movie_id: i64) -> anyhow::Result<()> {
        if self.store.reviews().remove(movie_id).await? {
            println!("Review deleted");
        } else {
            println!("Movie {movie_id} has no review");
        }
        Ok(())
    }

    /// Add a movie to the favorites, capturing display context.
    pub async fn favorite(&self, movie_id: i64) -> anyhow::Result<()> {
        let detail = self.catalog.movie_details(movie_id).await?;
        let context = MovieContext::new(
            detail.title,
            detail.poster_path,
            detail.release_date,
        );
        if self.store.favorites().add(movie_id, &context).await? {
            println!("Added {} to favorites", context.title);
        } else {
            println!("{} is already a favorite", context.title);
        }
        Ok(())
    }

    /// Remove a movie from the favorites.
    pub async fn unfavorite(&self, movie_id: i64) -> anyhow::Result<()> {
        if self.store.favorites().remove(movie_id).await? {
            println!("Removed from favorites");
        } else {
            println!("Movie {movie_id} is not a favorite");
        }
        Ok(())
    }

    /// Print the favorites list from the display side table alone.
    pub async fn favorites(&self) -> anyhow::Result<()> {
        let favorites = self.store.favorites().all().await?;
        if favorites.is_empty() {
            println!("No favorites yet");
            return Ok(());
        }
        for favorite in favorites {
            let title = if favorite.title.is_empty() {
                format!("movie #{}", favorite.movie_id)
            } else {
                favorite.title
            };
            println!("{}  {}", title, year_of(favorite.release_date.as_deref()));
        }
        Ok(())
    }

    /// Print the remembered search queries.
    pub async fn history(&self) -> anyhow::Result<()> {
        let history = self.store.history().all().await?;
        if history.is_empty() {
            println!("No search history");
        }
        for query in history {
            println!("{query}");
        }
        Ok(())
    }

    /// Forget the search history.
    pub async fn clear_history(&self) -> anyhow::Result<()> {
        self.store.history().clear().await?;
        println!("Search history cleared");
        Ok(())
    }

    /// Export all user data to a JSON file.
    pub async fn export(&self, output: &Path) -> anyhow::Result<()> {
        let json = self.store.export_json().await?;
        std::fs::write(output, json)
            .with_context(|| format!("writing {}", output.display()))?;
        tracing::info!("User data exported to {:?}", output);
        println!("Exported to {}", output.display());
        Ok(())
    }

    /// Import user data from a JSON file. Collections present in the file
    /// replace their stored counterparts wholesale.
    pub async fn import(&self, input: &Path) -> anyhow::Result<()> {
        let json = std::fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        self.store.import_json(&json).await?;
        let stats = self.store.stats().await?;
        tracing::info!(
            "Imported user data from {:?}: {} records across collections",
            input,
            stats.ratings_count
                + stats.reviews_count
                + stats.favorites_count
                + stats.search_history_count
        );
        println!(
            "Imported: {} rating(s), {} review(s), {} favorite(s), {} search(es)",
            stats.ratings_count,
            stats.reviews_count,
            stats.favorites_count,
            stats.search_history_count
        );
        Ok(())
    }

    /// Print collection counts.
    pub async fn stats(&self) -> anyhow::Result<()> {
        let stats = self.store.stats().await?;
        println!("Ratings:        {}", stats.ratings_count);
        println!("Reviews:        {}", stats.reviews_count);
        println!("Favorites:      {}", stats.favorites_count);
        println!("Search history: {}", stats.search_history_count);
        Ok(())
    }

    /// Probe the configured API key against the catalog.
    pub async fn check_key(&self) {
        if !self.catalog.is_configured() {
            println!("No usable API key configured; set TMDB_API_KEY");
            return;
        }
        if self.catalog.test_key().await {
            println!("API key accepted by the catalog");
        } else {
            println!("API key rejected or catalog unreachable");
        }
    }

    fn print_page(&self, heading: &str, page: &MovieListPage) {
        println!("{heading} ({} total)", page.total_results);
        for movie in &page.results {
            self.print_summary(movie);
        }
    }

    fn print_summary(&self, movie: &MovieSummary) {
        println!(
            "{:>8}  {}  {}  {:.1}/10",
            movie.id,
            movie.title,
            year_of(movie.release_date.as_deref()),
            movie.vote_average,
        );
    }
}

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating))
}

fn year_of(release_date: Option<&str>) -> String {
    release_date
        .and_then(|date| date.get(..4))
        .unwrap_or("????")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_repeat_the_rating() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars(0), "");
    }

    #[test]
    fn year_is_cut_from_the_date() {
        assert_eq!(year_of(Some("1999-10-15")), "1999");
        assert_eq!(year_of(None), "????");
    }
}
