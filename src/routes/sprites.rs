use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        common::PageQuery,
        sprite::{
            CreateSpriteRequest, SpriteDetailResponse, SpriteIconsResponse, SpriteListQuery,
            SpriteListResponse, SpriteSummary, UpdateSpriteRequest,
        },
    },
    error::AppError,
    routes::auth::{require_user, session_token},
    services::{auth_service, sprite_service},
    state::SharedState,
};

/// Sprite catalogue endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/sprites", get(list_sprites).post(create_sprite))
        .route(
            "/sprites/{id}",
            get(get_sprite).patch(update_sprite).delete(delete_sprite),
        )
        .route("/sprites/{id}/icons", get(list_sprite_icons))
}

#[utoipa::path(
    get,
    path = "/sprites",
    tag = "sprites",
    params(SpriteListQuery),
    responses((status = 200, description = "One page of sprites", body = SpriteListResponse))
)]
/// Page through the sprite catalogue with filters and sorting.
pub async fn list_sprites(
    State(state): State<SharedState>,
    jar: CookieJar,
    Query(query): Query<SpriteListQuery>,
) -> Result<Json<SpriteListResponse>, AppError> {
    let session_user = auth_service::session_user(&state, session_token(&jar)).await;
    let payload = sprite_service::list_sprites(&state, query, session_user).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    post,
    path = "/sprites",
    tag = "sprites",
    request_body = CreateSpriteRequest,
    responses(
        (status = 201, description = "Sprite created", body = SpriteDetailResponse),
        (status = 401, description = "No valid session")
    )
)]
/// Upload a new sprite together with its icons.
pub async fn create_sprite(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(payload): Json<CreateSpriteRequest>,
) -> Result<(StatusCode, Json<SpriteDetailResponse>), AppError> {
    let user_id = require_user(&state, &jar).await?;
    payload.validate()?;
    let detail = sprite_service::create_sprite(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

#[utoipa::path(
    get,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = Uuid, Path, description = "Identifier of the sprite")),
    responses(
        (status = 200, description = "Sprite detail with the first icon page", body = SpriteDetailResponse),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Fetch one sprite with its first page of icons.
pub async fn get_sprite(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<SpriteDetailResponse>, AppError> {
    let session_user = auth_service::session_user(&state, session_token(&jar)).await;
    let detail = sprite_service::get_sprite(&state, id, session_user).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/sprites/{id}/icons",
    tag = "sprites",
    params(
        ("id" = Uuid, Path, description = "Identifier of the sprite"),
        PageQuery,
    ),
    responses(
        (status = 200, description = "One page of the sprite's icons", body = SpriteIconsResponse),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Page through the icons of one sprite, oldest first.
pub async fn list_sprite_icons(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<SpriteIconsResponse>, AppError> {
    let payload = sprite_service::list_sprite_icons(&state, id, query).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    patch,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = Uuid, Path, description = "Identifier of the sprite")),
    request_body = UpdateSpriteRequest,
    responses(
        (status = 200, description = "Updated sprite", body = SpriteSummary),
        (status = 403, description = "Not the sprite owner"),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Patch sprite metadata; only the owner may do this.
pub async fn update_sprite(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSpriteRequest>,
) -> Result<Json<SpriteSummary>, AppError> {
    let user_id = require_user(&state, &jar).await?;
    payload.validate()?;
    let summary = sprite_service::update_sprite(&state, user_id, id, payload).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    delete,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = Uuid, Path, description = "Identifier of the sprite")),
    responses(
        (status = 204, description = "Sprite deleted"),
        (status = 403, description = "Not the sprite owner"),
        (status = 404, description = "Unknown sprite")
    )
)]
/// Delete a sprite with its icons and favourites; only the owner may do this.
pub async fn delete_sprite(
    State(state): State<SharedState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user(&state, &jar).await?;
    sprite_service::delete_sprite(&state, user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
