//! # Recommender
//!
//! Turns a movie title into five enriched recommendations:
//! 1. Resolve the title to its catalog row
//! 2. Rank the row (self excluded, score descending, index ascending on ties)
//! 3. Keep the top five
//! 4. Enrich each one from the metadata lookup, degrading per item on failure
//!
//! The catalog is shared read-only; the lookup is injected, so callers
//! decide whether it is the real TMDB client, a cached one, or a fake.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use data_loader::{Catalog, CatalogError, MovieId};
use tmdb_client::{CachedLookup, Enrichment, MetadataLookup, Rating, TmdbClient};

use crate::config::Config;
use crate::error::RecommendError;
use crate::ranking::{self, Candidate};

/// Number of movies returned per request
pub const RECOMMENDATION_COUNT: usize = 5;

/// Final recommendation returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the result list
    pub rank: usize,
    pub movie_id: MovieId,
    pub title: String,
    /// Similarity to the query movie
    pub score: f32,
    /// Empty when no poster is available
    pub poster_url: String,
    pub rating: Rating,
    pub overview: String,
}

/// Similarity-based recommender over a loaded catalog
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    lookup: Arc<dyn MetadataLookup>,
    image_base_url: String,
}

impl Recommender {
    /// Create a recommender from its collaborators
    ///
    /// # Arguments
    /// * `catalog` - Shared, loaded catalog
    /// * `lookup` - Source of poster/rating/overview details
    /// * `image_base_url` - Poster URL root, e.g. `https://image.tmdb.org/t/p/w500`
    pub fn new(
        catalog: Arc<Catalog>,
        lookup: Arc<dyn MetadataLookup>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            lookup,
            image_base_url: image_base_url.into(),
        }
    }

    /// Wire the production lookup stack: TMDB client behind a bounded cache.
    pub fn from_config(catalog: Arc<Catalog>, config: &Config) -> anyhow::Result<Self> {
        let client = TmdbClient::new(config.tmdb()).context("Failed to create TMDB client")?;
        let lookup = CachedLookup::new(client, config.cache_capacity());
        info!(
            capacity = config.cache_capacity().get(),
            "Enrichment cache ready"
        );

        Ok(Self::new(
            catalog,
            Arc::new(lookup),
            config.tmdb_image_url.clone(),
        ))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Main entry point: recommend movies similar to `title`
    ///
    /// # Returns
    /// Exactly [`RECOMMENDATION_COUNT`] recommendations, most similar first
    ///
    /// # Errors
    /// * `TitleNotFound` - `title` is not in the catalog
    /// * `CatalogTooSmall` - fewer than six movies, so no full list exists
    #[instrument(skip(self))]
    pub async fn recommend(&self, title: &str) -> Result<Vec<Recommendation>, RecommendError> {
        let start_time = Instant::now();

        let index = self.catalog.index_of(title)?;
        let candidates = self.rank_candidates(index)?;
        debug!(
            "Ranked candidates for '{}': {:?}",
            title,
            candidates.iter().map(|c| c.index).collect::<Vec<_>>()
        );

        let mut recommendations = Vec::with_capacity(candidates.len());
        for (position, candidate) in candidates.into_iter().enumerate() {
            let movie = self
                .catalog
                .movie_at(candidate.index)
                .ok_or_else(|| self.out_of_range(candidate.index))?;
            let enrichment = self.enrich(movie.id).await;

            recommendations.push(Recommendation {
                rank: position + 1,
                movie_id: movie.id,
                title: movie.title.clone(),
                score: candidate.score,
                poster_url: enrichment.poster_url,
                rating: enrichment.rating,
                overview: enrichment.overview,
            });
        }

        info!(
            "Recommended {} movies for '{}' in {:.2?}",
            recommendations.len(),
            title,
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Rank the catalog row at `index` and keep the top entries
    fn rank_candidates(&self, index: usize) -> Result<Vec<Candidate>, RecommendError> {
        let required = RECOMMENDATION_COUNT + 1;
        if self.catalog.len() < required {
            return Err(RecommendError::CatalogTooSmall {
                required,
                available: self.catalog.len(),
            });
        }

        let row = self
            .catalog
            .similarity_row(index)
            .ok_or_else(|| self.out_of_range(index))?;

        Ok(ranking::top_similar(row, index, RECOMMENDATION_COUNT))
    }

    fn out_of_range(&self, index: usize) -> RecommendError {
        RecommendError::Catalog(CatalogError::IndexOutOfRange {
            index,
            len: self.catalog.len(),
        })
    }

    /// Fetch and shape enrichment; a failed lookup degrades to defaults
    async fn enrich(&self, movie_id: MovieId) -> Enrichment {
        match self.lookup.fetch_details(movie_id).await {
            Ok(details) => Enrichment::from_details(&details, &self.image_base_url),
            Err(e) => {
                warn!(
                    movie_id,
                    lookup = self.lookup.name(),
                    error = %e,
                    "Enrichment failed, using defaults"
                );
                Enrichment::unavailable()
            }
        }
    }
}
