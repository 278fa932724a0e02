use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::taxonomy::{CategoriesResponse, PopularTagsResponse},
    error::AppError,
    services::taxonomy_service,
    state::SharedState,
};

/// Category and tag aggregation endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/tags/popular", get(popular_tags))
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "taxonomy",
    responses((status = 200, description = "Distinct categories", body = CategoriesResponse))
)]
/// Distinct sprite categories in ascending order.
pub async fn list_categories(
    State(state): State<SharedState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let payload = taxonomy_service::list_categories(&state).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    get,
    path = "/tags/popular",
    tag = "taxonomy",
    responses((status = 200, description = "Most used tags", body = PopularTagsResponse))
)]
/// Tags ranked by the number of sprites carrying them.
pub async fn popular_tags(
    State(state): State<SharedState>,
) -> Result<Json<PopularTagsResponse>, AppError> {
    let payload = taxonomy_service::popular_tags(&state).await?;
    Ok(Json(payload))
}
