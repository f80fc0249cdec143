//! Server crate for the ReelRecs recommendation engine.
//!
//! Holds the recommender (ranking plus enrichment), its configuration, and
//! the axum web layer that serves it.

pub mod config;
pub mod error;
pub mod ranking;
pub mod recommender;
pub mod web;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::RecommendError;
pub use recommender::{Recommendation, Recommender, RECOMMENDATION_COUNT};
pub use web::{create_router, AppError, AppState};
