//! Axum route handlers for career search.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::CareerRecord;
use crate::search::matcher::{search, suggest, SearchResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// GET /api/v1/careers?q=
pub async fn handle_search_careers(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResult> {
    Json(search(&state.catalog.careers, &params.q))
}

/// GET /api/v1/careers/suggest?q=
pub async fn handle_suggest(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        suggestions: suggest(&state.catalog.careers, &params.q),
    })
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerRecord>, AppError> {
    state
        .catalog
        .career(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}
