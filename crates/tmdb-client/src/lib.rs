//! Metadata client for enriching recommendations with TMDB details.
//!
//! This crate provides the enrichment side of the recommender:
//! - [`MetadataLookup`], the seam the recommender depends on
//! - [`TmdbClient`], the HTTP implementation against the TMDB v3 API
//! - [`CachedLookup`], a bounded LRU memo in front of any lookup
//! - [`Enrichment`], the display-ready poster/rating/overview record

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use data_loader::MovieId;

pub mod cache;
pub mod client;
pub mod enrichment;

pub use cache::CachedLookup;
pub use client::{TmdbClient, TmdbConfig};
pub use enrichment::{
    truncate_overview, Enrichment, Rating, DEFAULT_OVERVIEW, OVERVIEW_MAX_CHARS,
};

/// Errors that can occur when fetching movie details
#[derive(Error, Debug)]
pub enum EnrichmentError {
    /// Transport failure, timeout, or undecodable body
    #[error("Request for movie {movie_id} failed: {source}")]
    Request {
        movie_id: MovieId,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("Metadata service returned status {status} for movie {movie_id}: {message}")]
    UnexpectedStatus {
        movie_id: MovieId,
        status: u16,
        message: String,
    },

    /// The HTTP client itself could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Raw movie details as returned by `GET /movie/{id}`.
///
/// Every field is optional; TMDB omits or nulls them freely.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// Source of per-movie metadata.
///
/// The recommender only talks to this trait, so tests and alternative
/// backends can stand in for the real HTTP client.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Fetch details for a single movie
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, EnrichmentError>;

    /// Lookup name for logging
    fn name(&self) -> &'static str;
}
