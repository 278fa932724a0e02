use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::icon::{ExtractRequest, ExtractResponse, IconListQuery, IconListResponse},
    error::AppError,
    services::icon_service,
    state::SharedState,
};

/// Global icon search and symbol extraction endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/icons", get(list_icons))
        .route("/icons/extract", post(extract_icons))
}

#[utoipa::path(
    get,
    path = "/icons",
    tag = "icons",
    params(IconListQuery),
    responses((status = 200, description = "One page of icons", body = IconListResponse))
)]
/// Page through every icon in the catalogue.
pub async fn list_icons(
    State(state): State<SharedState>,
    Query(query): Query<IconListQuery>,
) -> Result<Json<IconListResponse>, AppError> {
    let payload = icon_service::list_icons(&state, query).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    post,
    path = "/icons/extract",
    tag = "icons",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Icons recovered from the sprite markup", body = ExtractResponse),
        (status = 400, description = "Input is not an SVG document")
    )
)]
/// Split uploaded sprite markup into standalone icons.
pub async fn extract_icons(
    State(state): State<SharedState>,
    Json(payload): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    payload.validate()?;
    let payload = icon_service::extract_icons(&state, payload)?;
    Ok(Json(payload))
}
