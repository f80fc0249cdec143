//! Catalog building and indexing logic.
//!
//! Builds the [`Catalog`] from parsed artifacts:
//! - validate that matrix and movie list agree on dimension
//! - index titles for O(1) lookup (first occurrence wins)
//! - report, but tolerate, matrix anomalies (asymmetry, weak diagonal)

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use tracing::{info, warn};

/// File name of the ordered movie list inside the model directory
pub const MOVIE_LIST_FILE: &str = "movie_list.dat";

/// File name of the similarity matrix inside the model directory
pub const SIMILARITY_FILE: &str = "similarity.dat";

const SYMMETRY_TOLERANCE: f32 = 1e-4;

impl Catalog {
    /// Build a catalog from movies and a matrix of matching dimension.
    pub fn new(movies: Vec<Movie>, similarity: SimilarityMatrix) -> Result<Self> {
        if similarity.dimension() != movies.len() {
            return Err(DataLoadError::DimensionMismatch {
                rows: similarity.dimension(),
                movies: movies.len(),
            });
        }

        let mut title_index = HashMap::with_capacity(movies.len());
        for (idx, movie) in movies.iter().enumerate() {
            match title_index.entry(movie.title.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(first) => {
                    warn!(
                        title = %movie.title,
                        first_index = *first.get(),
                        duplicate_index = idx,
                        "Duplicate title in catalog, lookups resolve to the first entry"
                    );
                }
            }
        }

        let catalog = Self {
            movies,
            similarity,
            title_index,
        };
        catalog.report_matrix_anomalies();
        Ok(catalog)
    }

    /// Load the catalog from a model directory
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse the movie list and the similarity matrix in parallel
    /// 2. Validate the matrix shape
    /// 3. Build the title index
    pub fn load_from_dir(model_dir: &Path) -> Result<Self> {
        info!(dir = %model_dir.display(), "Loading catalog");

        let movies_path = model_dir.join(MOVIE_LIST_FILE);
        let similarity_path = model_dir.join(SIMILARITY_FILE);

        let (movies, rows) = rayon::join(
            || parser::parse_movies(&movies_path),
            || parser::parse_similarity(&similarity_path),
        );
        let movies = movies?;
        let similarity = SimilarityMatrix::from_rows(rows?)?;

        let catalog = Self::new(movies, similarity)?;
        info!(movies = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Exact (case-insensitive) matches come first, then substring matches;
    /// catalog order within each group.
    pub fn search(&self, query: &str) -> Vec<(usize, &Movie)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, usize, &Movie)> = self
            .movies
            .iter()
            .enumerate()
            .filter_map(|(idx, movie)| {
                let title = movie.title.to_lowercase();
                if title == needle {
                    Some((true, idx, movie))
                } else if title.contains(&needle) {
                    Some((false, idx, movie))
                } else {
                    None
                }
            })
            .collect();

        // Exact matches first; stable sort keeps catalog order within groups
        matches.sort_by_key(|(exact, _, _)| !*exact);
        matches.into_iter().map(|(_, idx, movie)| (idx, movie)).collect()
    }

    /// Log rows whose self-similarity is not the row maximum and the first
    /// asymmetric pair found. Ranking excludes the self-match by index, so
    /// neither is fatal.
    fn report_matrix_anomalies(&self) {
        let n = self.similarity.dimension();

        let weak_diagonal = (0..n)
            .filter(|&i| {
                self.similarity.row(i).is_some_and(|row| {
                    let own = row[i];
                    row.iter().any(|&v| v > own)
                })
            })
            .count();
        if weak_diagonal > 0 {
            warn!(
                rows = weak_diagonal,
                "Similarity rows where the movie is not its own best match"
            );
        }

        let asymmetric = (0..n).find_map(|i| {
            (i + 1..n).find_map(|j| {
                let a = self.similarity.get(i, j)?;
                let b = self.similarity.get(j, i)?;
                ((a - b).abs() > SYMMETRY_TOLERANCE).then_some((i, j))
            })
        });
        if let Some((i, j)) = asymmetric {
            warn!(row = i, column = j, "Similarity matrix is not symmetric");
        }
    }
}
