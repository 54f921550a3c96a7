//! `MovieSphere` — movie discovery CLI.
//!
//! Browses a remote movie catalog (trending, top rated, search, details)
//! and keeps the user's ratings, reviews, favorites and search history in
//! a local store, with JSON export/import.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use moviesphere_catalog::{CatalogClient, OmdbClient};
use moviesphere_store::UserDataStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::App;
use settings::Settings;

#[derive(Parser)]
#[command(name = "moviesphere")]
#[command(about = "Discover movies and keep your own ratings, reviews and favorites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// This week's trending movies
    Trending {
        /// Result page
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// All-time top rated movies
    TopRated {
        /// Result page
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search movies by title
    Search {
        /// Title to search for
        query: String,
        /// Result page
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Use the backup catalog instead
        #[arg(long)]
        backup: bool,
    },
    /// Full details for one movie, including your own annotations
    Show {
        /// Movie id
        movie_id: i64,
    },
    /// Look a movie up in the backup catalog by IMDb id
    Imdb {
        /// IMDb id, e.g. tt0083658
        imdb_id: String,
    },
    /// Rate a movie 1-5 stars
    Rate {
        /// Movie id
        movie_id: i64,
        /// Stars
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
    },
    /// Remove your rating for a movie
    Unrate {
        /// Movie id
        movie_id: i64,
    },
    /// Write (or rewrite) your review of a movie
    Review {
        /// Movie id
        movie_id: i64,
        /// Review text, at least 10 characters
        text: String,
    },
    /// List your reviews, most recently updated first
    Reviews,
    /// Delete your review of a movie
    Unreview {
        /// Movie id
        movie_id: i64,
    },
    /// Add a movie to your favorites
    Favorite {
        /// Movie id
        movie_id: i64,
    },
    /// Remove a movie from your favorites
    Unfavorite {
        /// Movie id
        movie_id: i64,
    },
    /// List your favorites
    Favorites,
    /// Show remembered search queries
    History,
    /// Forget all remembered search queries
    ClearHistory,
    /// Export all user data to a JSON file
    Export {
        /// Output file
        #[arg(short, long, default_value = "moviesphere-backup.json")]
        output: PathBuf,
    },
    /// Import user data from a JSON file
    Import {
        /// Backup file to import
        file: PathBuf,
    },
    /// Show collection counts
    Stats,
    /// Verify the configured API key against the catalog
    CheckKey,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviesphere=info,moviesphere_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    std::fs::create_dir_all(&settings.data_dir)
        .with_context(|| format!("creating data dir {}", settings.data_dir.display()))?;
    let database_path = settings.database_path();
    let store = UserDataStore::new(&database_path.to_string_lossy()).await?;

    let mut backup_catalog = OmdbClient::new(settings.omdb_api_key.clone());
    if let Some(base_url) = &settings.omdb_base_url {
        backup_catalog = backup_catalog.with_base_url(base_url.clone());
    }
    let app = App::new(
        CatalogClient::new(settings.catalog_config()),
        backup_catalog,
        store,
    );

    match cli.command {
        Command::Trending { page } => app.trending(page).await,
        Command::TopRated { page } => app.top_rated(page).await,
        Command::Search {
            query,
            page,
            backup,
        } => {
            if backup {
                app.backup_search(&query).await;
                Ok(())
            } else {
                app.search(&query, page).await
            }
        }
        Command::Show { movie_id } => app.show(movie_id).await,
        Command::Imdb { imdb_id } => app.imdb(&imdb_id).await,
        Command::Rate { movie_id, rating } => app.rate(movie_id, rating).await,
        Command::Unrate { movie_id } => app.unrate(movie_id).await,
        Command::Review { movie_id, text } => app.review(movie_id, &text).await,
        Command::Reviews => app.reviews().await,
        Command::Unreview { movie_id } => app.unreview(movie_id).await,
        Command::Favorite { movie_id } => app.favorite(movie_id).await,
        Command::Unfavorite { movie_id } => app.unfavorite(movie_id).await,
        Command::Favorites => app.favorites().await,
        Command::History => app.history().await,
        Command::ClearHistory => app.clear_history().await,
        Command::Export { output } => app.export(&output).await,
        Command::Import { file } => app.import(&file).await,
        Command::Stats => app.stats().await,
        Command::CheckKey => {
            app.check_key().await;
            Ok(())
        }
    }
}
