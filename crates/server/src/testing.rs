//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use data_loader::{Catalog, Movie, MovieId, SimilarityMatrix};
use tmdb_client::{EnrichmentError, MetadataLookup, MovieDetails};

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Seven movies with a symmetric matrix.
///
/// Spectre ranks: Skyfall, Quantum of Solace, The Dark Knight Rises,
/// John Carter, Avatar (Tangled is sixth).
pub fn sample_catalog() -> Arc<Catalog> {
    let movies = [
        (19995, "Avatar"),
        (206647, "Spectre"),
        (49026, "The Dark Knight Rises"),
        (49529, "John Carter"),
        (38757, "Tangled"),
        (10764, "Quantum of Solace"),
        (37724, "Skyfall"),
    ]
    .into_iter()
    .map(|(id, title)| Movie {
        id,
        title: title.to_string(),
    })
    .collect();

    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.1, 0.3, 0.6, 0.2, 0.1, 0.1],
        vec![0.1, 1.0, 0.4, 0.2, 0.05, 0.8, 0.9],
        vec![0.3, 0.4, 1.0, 0.3, 0.1, 0.5, 0.5],
        vec![0.6, 0.2, 0.3, 1.0, 0.2, 0.2, 0.1],
        vec![0.2, 0.05, 0.1, 0.2, 1.0, 0.0, 0.0],
        vec![0.1, 0.8, 0.5, 0.2, 0.0, 1.0, 0.85],
        vec![0.1, 0.9, 0.5, 0.1, 0.0, 0.85, 1.0],
    ])
    .expect("valid matrix");

    Arc::new(Catalog::new(movies, matrix).expect("valid catalog"))
}

/// The three-movie example catalog ["A", "B", "C"]
pub fn tiny_catalog() -> Arc<Catalog> {
    let movies = [(1, "A"), (2, "B"), (3, "C")]
        .into_iter()
        .map(|(id, title)| Movie {
            id,
            title: title.to_string(),
        })
        .collect();
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.2, 0.5],
        vec![0.2, 1.0, 0.9],
        vec![0.5, 0.9, 1.0],
    ])
    .expect("valid matrix");

    Arc::new(Catalog::new(movies, matrix).expect("valid catalog"))
}

/// In-memory lookup: canned details per id, configurable failures.
///
/// Ids without canned details get a poster named after the id and a 6.5
/// rating.
#[derive(Default)]
pub struct StaticLookup {
    pub details: HashMap<MovieId, MovieDetails>,
    pub failing: Vec<MovieId>,
    pub calls: AtomicUsize,
}

impl StaticLookup {
    pub fn with_details(mut self, movie_id: MovieId, details: MovieDetails) -> Self {
        self.details.insert(movie_id, details);
        self
    }

    pub fn failing_for(mut self, movie_id: MovieId) -> Self {
        self.failing.push(movie_id);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataLookup for StaticLookup {
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, EnrichmentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&movie_id) {
            return Err(EnrichmentError::UnexpectedStatus {
                movie_id,
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(self.details.get(&movie_id).cloned().unwrap_or(MovieDetails {
            poster_path: Some(format!("/{movie_id}.jpg")),
            vote_average: Some(6.5),
            overview: Some(format!("Overview of {movie_id}")),
        }))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
