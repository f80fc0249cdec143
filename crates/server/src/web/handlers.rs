use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use data_loader::MovieId;

use super::page::{render_page, PageBody};
use super::{AppError, AppResult, AppState, SEARCH_LIMIT};
use crate::recommender::Recommendation;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

/// One `/api/search` hit
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub index: usize,
    pub movie_id: MovieId,
    pub title: String,
}

/// Non-blank query parameter, trimmed
fn required(value: Option<String>, name: &str) -> AppResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::InvalidInput(format!("missing query parameter '{name}'"))),
    }
}

pub async fn health_check() -> &'static str {
    "ok"
}

/// Title selector with no results
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let titles = state.recommender.catalog().title_list();
    Html(render_page(&titles, None, PageBody::Empty))
}

/// Title selector plus five movie cards, or an error message
pub async fn recommend_page(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> Response {
    let catalog = state.recommender.catalog();
    let titles = catalog.title_list();

    let Ok(title) = required(params.title, "title") else {
        return Html(render_page(&titles, None, PageBody::Empty)).into_response();
    };

    match state.recommender.recommend(&title).await {
        Ok(recommendations) => Html(render_page(
            &titles,
            Some(&title),
            PageBody::Results(&recommendations),
        ))
        .into_response(),
        Err(e) => {
            let err = AppError::from(e);
            let message = err.to_string();
            (
                err.status(),
                Html(render_page(&titles, None, PageBody::Error(&message))),
            )
                .into_response()
        }
    }
}

pub async fn api_recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let title = required(params.title, "title")?;
    let recommendations = state.recommender.recommend(&title).await?;
    Ok(Json(recommendations))
}

pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<SearchResult>>> {
    let query = required(params.q, "q")?;

    let results: Vec<SearchResult> = state
        .recommender
        .catalog()
        .search(&query)
        .into_iter()
        .take(SEARCH_LIMIT)
        .map(|(index, movie)| SearchResult {
            index,
            movie_id: movie.id,
            title: movie.title.clone(),
        })
        .collect();
    debug!("Search '{}' matched {} titles", query, results.len());

    Ok(Json(results))
}
