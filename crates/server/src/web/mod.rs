//! HTTP surface: the HTML page plus a small JSON API.

mod handlers;
pub mod page;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::error::RecommendError;
use crate::recommender::Recommender;

/// Maximum number of titles returned by `/api/search`
pub const SEARCH_LIMIT: usize = 20;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }
}

/// Creates the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/recommend", get(handlers::recommend_page))
        .route("/health", get(handlers::health_check))
        // JSON API
        .route("/api/recommend", get(handlers::api_recommend))
        .route("/api/search", get(handlers::api_search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Web-layer errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Recommend(RecommendError::TitleNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Recommend(RecommendError::CatalogTooSmall { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Recommend(RecommendError::Catalog(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
