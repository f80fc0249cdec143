//! # Data Loader Crate
//!
//! This crate loads the precomputed recommendation artifacts into a
//! read-only [`Catalog`]: the ordered movie list and the matching
//! similarity matrix.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, SimilarityMatrix, Catalog)
//! - **parser**: Parse the .dat artifacts into Rust structs
//! - **index**: Validate and index the catalog for fast title lookups
//! - **error**: Error types for loading and lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_dir(Path::new("model"))?;
//!
//! let index = catalog.index_of("Avatar")?;
//! let row = catalog.similarity_row(index).unwrap();
//! println!("{} has {} neighbours", catalog.id_at(index)?, row.len() - 1);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, DataLoadError, Result};
pub use index::{MOVIE_LIST_FILE, SIMILARITY_FILE};
pub use types::{Catalog, Movie, MovieId, SimilarityMatrix};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let matrix = SimilarityMatrix::from_rows(Vec::new()).unwrap();
        let catalog = Catalog::new(Vec::new(), matrix).unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.title_list().is_empty());
        assert!(catalog.index_of("Avatar").is_err());
    }

    #[test]
    fn test_matrix_row_access() {
        let matrix =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.3, 1.0]]).unwrap();

        assert_eq!(matrix.dimension(), 2);
        assert_eq!(matrix.row(1), Some(&[0.3, 1.0][..]));
        assert_eq!(matrix.get(0, 1), Some(0.3));
        assert_eq!(matrix.get(0, 2), None);
        assert!(matrix.row(2).is_none());
    }
}
