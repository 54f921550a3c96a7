//! # moviesphere-catalog
//!
//! Clients for the remote movie catalogs backing `MovieSphere`.
//!
//! This crate provides:
//! - [`CatalogClient`] — the primary catalog (TMDB): trending, top-rated,
//!   search, details, credits, and a joined detail+credits fetch, behind a
//!   short-lived in-memory response cache
//! - [`OmdbClient`] — the backup catalog (OMDB) with its simpler key and
//!   response conventions
//! - Typed wire models validated at the parse boundary
//! - A [`Transport`] seam so tests can run without a network
//!
//! All operations make a single attempt; failures are normalized into
//! [`Error`] kinds and never expose the API key.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cache;
mod client;
pub mod config;
mod error;
pub mod models;
mod omdb;
mod transport;

pub use client::CatalogClient;
pub use config::{CatalogConfig, Endpoints, PosterSize};
pub use error::{Error, Result};
pub use models::{
    CastMember, Credits, CrewMember, Genre, MovieDetail, MovieListPage, MovieSummary,
    MovieWithCredits,
};
pub use omdb::{OmdbClient, OmdbDetail, OmdbMovie, OmdbSearchResult};
pub use transport::{HttpResponse, HttpTransport, Transport};
