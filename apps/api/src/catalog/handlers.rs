use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::career::CareerCategory;
use crate::models::resource::{ResourceRecord, ResourceType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
}

/// GET /api/v1/categories
pub async fn handle_list_categories() -> Json<Vec<CareerCategory>> {
    Json(CareerCategory::ALL.to_vec())
}

/// GET /api/v1/resources?type=
pub async fn handle_list_resources(
    State(state): State<AppState>,
    Query(params): Query<ResourceQuery>,
) -> Json<Vec<ResourceRecord>> {
    Json(state.catalog.resources_of_type(params.resource_type))
}
