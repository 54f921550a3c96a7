#![allow(clippy::expect_used, clippy::uninlined_format_args)]
//! Example: Search the movie catalog from the command line
//!
//! ## Prerequisites
//!
//! 1. Create an account at https://www.themoviedb.org/
//! 2. Request an API key under Settings → API
//! 3. Export it as `TMDB_API_KEY`
//!
//! ## Running
//!
//! ```bash
//! TMDB_API_KEY=... cargo run --package moviesphere-catalog --example search_movies -- "fight club"
//! ```

use moviesphere_catalog::{CatalogClient, CatalogConfig, PosterSize};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TMDB_API_KEY").expect("set TMDB_API_KEY to run this example");
    let query = std::env::args()
        .nth(1)
        .expect("usage: search_movies <query>");

    let client = CatalogClient::new(CatalogConfig::new(api_key));

    println!("Searching for \"{}\"...\n", query);
    let page = client.search(&query, 1).await?;
    println!(
        "{} results ({} total across {} pages)\n",
        page.results.len(),
        page.total_results,
        page.total_pages
    );

    for movie in &page.results {
        println!(
            "  {:>8}  {}  ({})",
            movie.id,
            movie.title,
            movie.release_date.as_deref().unwrap_or("unknown")
        );
        println!(
            "            {}",
            client.image_url(movie.poster_path.as_deref(), PosterSize::Medium)
        );
    }

    // A second identical search is served from the cache
    client.search(&query, 1).await?;
    println!("\nCached responses: {}", client.cache_size());

    Ok(())
}
