use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use uuid::Uuid;

use crate::{error::AppError, services::preview_service, state::SharedState};

/// Social-preview card endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/sprites/{id}/preview.svg", get(sprite_preview))
}

#[utoipa::path(
    get,
    path = "/sprites/{id}/preview.svg",
    tag = "sprites",
    params(("id" = Uuid, Path, description = "Identifier of the sprite")),
    responses(
        (status = 200, description = "Link-preview card", body = String, content_type = "image/svg+xml"),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Render the social-preview card for one sprite.
pub async fn sprite_preview(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let card = preview_service::sprite_preview(&state, id).await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], card).into_response())
}
