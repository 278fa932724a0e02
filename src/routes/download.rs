use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use validator::Validate;

use crate::{
    dto::download::DownloadRequest, error::AppError, services::download_service,
    state::SharedState,
};

/// Sprite file generation endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/download", post(download_sprite))
}

#[utoipa::path(
    post,
    path = "/download",
    tag = "download",
    request_body = DownloadRequest,
    responses(
        (status = 200, description = "Combined sprite file", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Neither a sprite id nor icons were supplied"),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Combine icons into one sprite file and serve it as an attachment.
///
/// Passing a persisted sprite id also bumps its download counter.
pub async fn download_sprite(
    State(state): State<SharedState>,
    Json(payload): Json<DownloadRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;
    let file = download_service::build_sprite_file(&state, payload).await?;

    let headers = [
        (header::CONTENT_TYPE, "image/svg+xml".to_owned()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", file.filename),
        ),
    ];
    Ok((headers, file.content).into_response())
}
