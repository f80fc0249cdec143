//! Errors surfaced by the recommender to its callers.

use data_loader::CatalogError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendError {
    /// The requested title is not in the catalog
    #[error("Movie not found in catalog: {0}")]
    TitleNotFound(String),

    /// Too few movies to fill a full recommendation list
    #[error("Catalog has {available} movies but at least {required} are needed")]
    CatalogTooSmall { required: usize, available: usize },

    /// Catalog lookup failed for a resolved index
    #[error("Catalog lookup failed: {0}")]
    Catalog(CatalogError),
}

impl From<CatalogError> for RecommendError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::TitleNotFound(title) => RecommendError::TitleNotFound(title),
            other => RecommendError::Catalog(other),
        }
    }
}
