use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::put,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::{
    error::AppError, routes::auth::require_user, services::favourite_service, state::SharedState,
};

/// Favourite toggle endpoints; both directions are idempotent.
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/favourites/{sprite_id}",
        put(add_favourite).delete(remove_favourite),
    )
}

#[utoipa::path(
    put,
    path = "/favourites/{sprite_id}",
    tag = "favourites",
    params(("sprite_id" = Uuid, Path, description = "Sprite to mark as favourite")),
    responses(
        (status = 204, description = "Sprite is now a favourite"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Mark a sprite as favourite for the session user.
pub async fn add_favourite(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(sprite_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user(&state, &jar).await?;
    favourite_service::add_favourite(&state, user_id, sprite_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/favourites/{sprite_id}",
    tag = "favourites",
    params(("sprite_id" = Uuid, Path, description = "Sprite to unmark")),
    responses(
        (status = 204, description = "Favourite mark removed"),
        (status = 401, description = "No valid session")
    )
)]
/// Remove a favourite mark for the session user.
pub async fn remove_favourite(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(sprite_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user(&state, &jar).await?;
    favourite_service::remove_favourite(&state, user_id, sprite_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
