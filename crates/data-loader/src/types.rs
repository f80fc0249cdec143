//! Core domain types for the recommendation catalog.
//!
//! The catalog is an ordered list of movies plus a dense similarity matrix
//! whose row/column order matches the movie order exactly. Position is the
//! only link between the two, so neither is ever reordered after loading.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CatalogError, DataLoadError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB identifier of a movie
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// User-facing lookup key
    pub title: String,
}

// =============================================================================
// Similarity Matrix
// =============================================================================

/// Square, dense matrix of pairwise similarity scores.
///
/// Stored row-major in one allocation. Entry `(i, j)` is the similarity
/// between catalog entries `i` and `j`; higher means more similar.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dimension: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build a matrix from parsed rows.
    ///
    /// Every row must have as many values as there are rows, and every
    /// value must be finite.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let dimension = rows.len();
        let mut values = Vec::with_capacity(dimension * dimension);

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(DataLoadError::RowLengthMismatch {
                    expected: dimension,
                    found: row.len(),
                    row: row_idx,
                });
            }
            if let Some(column) = row.iter().position(|v| !v.is_finite()) {
                return Err(DataLoadError::NonFiniteValue {
                    row: row_idx,
                    column,
                });
            }
            values.extend(row);
        }

        Ok(Self { dimension, values })
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Borrow one row of the matrix
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.dimension {
            return None;
        }
        let start = index * self.dimension;
        Some(&self.values[start..start + self.dimension])
    }

    /// Single entry lookup
    pub fn get(&self, row: usize, column: usize) -> Option<f32> {
        self.row(row)?.get(column).copied()
    }
}

// =============================================================================
// Catalog - the read-only store
// =============================================================================

/// Ordered movies, their similarity matrix, and a title index.
///
/// Immutable once built; share it with `Arc<Catalog>`.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,
    pub(crate) similarity: SimilarityMatrix,
    /// Title -> position of its first occurrence
    pub(crate) title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Ordered titles, in matrix order
    pub fn title_list(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    /// Resolve a title to its row index.
    ///
    /// Exact, case-sensitive match. Duplicated titles resolve to the first
    /// occurrence.
    pub fn index_of(&self, title: &str) -> std::result::Result<usize, CatalogError> {
        self.title_index
            .get(title)
            .copied()
            .ok_or_else(|| CatalogError::TitleNotFound(title.to_string()))
    }

    /// Movie id stored at a row index
    pub fn id_at(&self, index: usize) -> std::result::Result<MovieId, CatalogError> {
        self.movie_at(index)
            .map(|m| m.id)
            .ok_or(CatalogError::IndexOutOfRange {
                index,
                len: self.movies.len(),
            })
    }

    /// Full movie record at a row index
    pub fn movie_at(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Similarity scores of one movie against every catalog entry
    pub fn similarity_row(&self, index: usize) -> Option<&[f32]> {
        self.similarity.row(index)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
