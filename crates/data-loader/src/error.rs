//! Error types for the data-loader crate.
//!
//! Two families live here:
//! - [`DataLoadError`] for anything that goes wrong while reading the
//!   startup artifacts. These are fatal: the process cannot serve without
//!   a catalog.
//! - [`CatalogError`] for lookups against an already loaded catalog.

use thiserror::Error;

/// Errors that can occur while loading the catalog and similarity matrix
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A matrix row has the wrong number of columns
    #[error("Expected {expected} values but found {found} in row {row}")]
    RowLengthMismatch {
        expected: usize,
        found: usize,
        row: usize,
    },

    /// Matrix and catalog disagree on the number of entries
    #[error("Similarity matrix has {rows} rows but the catalog has {movies} movies")]
    DimensionMismatch { rows: usize, movies: usize },

    /// A similarity value is NaN or infinite
    #[error("Non-finite similarity value at ({row}, {column})")]
    NonFiniteValue { row: usize, column: usize },
}

/// Errors returned by lookups on a loaded [`Catalog`](crate::Catalog)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Movie not found in catalog: {0}")]
    TitleNotFound(String),

    #[error("Catalog index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
