use uuid::Uuid;

use crate::{
    dao::models::{
        NewIconEntity, NewSpriteEntity, SpriteEntity, SpriteFilter, SpritePatchEntity,
    },
    dto::{
        common::{PageMeta, PageQuery, split_csv},
        sprite::{
            CreateSpriteRequest, SpriteDetailResponse, SpriteIconsResponse, SpriteListQuery,
            SpriteListResponse, SpriteSummary, UpdateSpriteRequest,
        },
    },
    error::ServiceError,
    state::SharedState,
};

/// Page through the sprite catalogue.
pub async fn list_sprites(
    state: &SharedState,
    query: SpriteListQuery,
    session_user: Option<Uuid>,
) -> Result<SpriteListResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let config = state.config();

    let page = config.clamp_page(query.page);
    let page_size = config.clamp_page_size(query.page_size);

    let filter = SpriteFilter {
        category: query.category.filter(|value| !value.is_empty()),
        user_id: query.user_id,
        search: query.search.filter(|value| !value.is_empty()),
        tags: split_csv(query.tags.as_deref()),
        page,
        page_size,
        sort_by: query.sort_by.unwrap_or_default().into(),
        sort_order: query.sort_order.unwrap_or_default().into(),
        session_user,
    };

    let result = store.list_sprites(filter).await?;
    let meta = PageMeta::from_page(page, page_size, &result);
    Ok(SpriteListResponse {
        sprites: result.items.into_iter().map(Into::into).collect(),
        meta,
    })
}

/// Persist an uploaded sprite for `user_id` and return its detail view.
pub async fn create_sprite(
    state: &SharedState,
    user_id: Uuid,
    request: CreateSpriteRequest,
) -> Result<SpriteDetailResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let config = state.config();

    if request.icons.len() > config.max_icons_per_sprite() {
        return Err(ServiceError::InvalidInput(format!(
            "a sprite can hold at most {} icons (got {})",
            config.max_icons_per_sprite(),
            request.icons.len()
        )));
    }
    for icon in &request.icons {
        if icon.svg.len() > config.max_svg_bytes() {
            return Err(ServiceError::InvalidInput(format!(
                "icon `{}` exceeds the {} byte markup limit",
                icon.name,
                config.max_svg_bytes()
            )));
        }
    }

    let entity = NewSpriteEntity {
        name: request.name,
        description: request.description,
        category: request.category,
        tags: request.tags,
        user_id,
        icons: request
            .icons
            .into_iter()
            .map(|icon| NewIconEntity {
                name: icon.name,
                svg: icon.svg,
            })
            .collect(),
    };

    let id = store.create_sprite(entity).await?;
    get_sprite(state, id, Some(user_id)).await
}

/// Fetch one sprite with its first page of icons.
pub async fn get_sprite(
    state: &SharedState,
    id: Uuid,
    session_user: Option<Uuid>,
) -> Result<SpriteDetailResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let sprite = require_sprite(state, id, session_user).await?;
    let icons = store
        .list_sprite_icons(id, 1, state.config().detail_icon_page_size())
        .await?;
    Ok(SpriteDetailResponse::new(sprite, icons))
}

/// Page through the icons of one sprite (infinite-scroll feed).
pub async fn list_sprite_icons(
    state: &SharedState,
    id: Uuid,
    query: PageQuery,
) -> Result<SpriteIconsResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let config = state.config();

    require_sprite(state, id, None).await?;

    let page = config.clamp_page(query.page);
    let page_size = config.clamp_page_size(query.page_size);
    let result = store.list_sprite_icons(id, page, page_size).await?;
    let meta = PageMeta::from_page(page, page_size, &result);
    Ok(SpriteIconsResponse {
        icons: result.items.into_iter().map(Into::into).collect(),
        meta,
    })
}

/// Apply a metadata patch to a sprite owned by `user_id`.
pub async fn update_sprite(
    state: &SharedState,
    user_id: Uuid,
    id: Uuid,
    request: UpdateSpriteRequest,
) -> Result<SpriteSummary, ServiceError> {
    let store = state.require_sprite_store().await?;

    let sprite = require_sprite(state, id, Some(user_id)).await?;
    ensure_owner(&sprite, user_id)?;

    let patch = SpritePatchEntity {
        name: request.name,
        description: request.description,
        category: request.category,
        tags: request.tags,
    };
    if !store.update_sprite(id, patch).await? {
        return Err(ServiceError::NotFound(format!("sprite `{id}` not found")));
    }

    let updated = require_sprite(state, id, Some(user_id)).await?;
    Ok(updated.into())
}

/// Delete a sprite owned by `user_id`, icons and favourites included.
pub async fn delete_sprite(
    state: &SharedState,
    user_id: Uuid,
    id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_sprite_store().await?;

    let sprite = require_sprite(state, id, None).await?;
    ensure_owner(&sprite, user_id)?;

    if !store.delete_sprite(id).await? {
        return Err(ServiceError::NotFound(format!("sprite `{id}` not found")));
    }
    Ok(())
}

async fn require_sprite(
    state: &SharedState,
    id: Uuid,
    session_user: Option<Uuid>,
) -> Result<SpriteEntity, ServiceError> {
    let store = state.require_sprite_store().await?;
    store
        .find_sprite(id, session_user)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("sprite `{id}` not found")))
}

fn ensure_owner(sprite: &SpriteEntity, user_id: Uuid) -> Result<(), ServiceError> {
    if sprite.owner.id != user_id {
        return Err(ServiceError::Forbidden(
            "only the sprite owner can modify it".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        dao::models::{IconEntity, PageEntity, UserSummaryEntity},
        state::AppState,
        testkit::StubStore,
    };
    use std::sync::Arc;
    use std::time::SystemTime;

    fn sprite_entity(id: Uuid, owner: Uuid) -> SpriteEntity {
        SpriteEntity {
            id,
            name: "Arrows".into(),
            description: "Directional arrows".into(),
            category: "navigation".into(),
            tags: vec!["ui".into()],
            download_count: 0,
            owner: UserSummaryEntity {
                id: owner,
                username: "alice".into(),
                display_name: "Alice".into(),
            },
            icon_count: 1,
            favourite_count: 0,
            is_favourite: false,
            created_at: SystemTime::UNIX_EPOCH,
            updated_at: SystemTime::UNIX_EPOCH,
        }
    }

    fn icon_page(sprite_id: Uuid, owner: Uuid) -> PageEntity<IconEntity> {
        PageEntity {
            items: vec![IconEntity {
                id: Uuid::new_v4(),
                name: "arrow-up".into(),
                svg: "<svg viewBox=\"0 0 4 4\"/>".into(),
                sprite_id,
                user_id: owner,
                created_at: SystemTime::UNIX_EPOCH,
            }],
            total: 1,
        }
    }

    #[tokio::test]
    async fn degraded_mode_rejects_listing() {
        let state = AppState::new(AppConfig::default());
        let result = list_sprites(&state, SpriteListQuery::default(), None).await;
        assert!(matches!(result, Err(ServiceError::Degraded)));
    }

    #[tokio::test]
    async fn unknown_sprite_is_not_found() {
        let state = AppState::new(AppConfig::default());
        state.set_sprite_store(Arc::new(StubStore::default())).await;

        let result = get_sprite(&state, Uuid::new_v4(), None).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn detail_embeds_first_icon_page() {
        let sprite_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let store = StubStore::default()
            .with_sprite(sprite_entity(sprite_id, owner))
            .with_icon_page(icon_page(sprite_id, owner));
        let state = AppState::new(AppConfig::default());
        state.set_sprite_store(Arc::new(store)).await;

        let detail = get_sprite(&state, sprite_id, None).await.unwrap();
        assert_eq!(detail.total_icons, 1);
        assert!(!detail.has_more_icons);
        assert_eq!(detail.icons.len(), 1);
    }

    #[tokio::test]
    async fn non_owner_cannot_update() {
        let sprite_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let store = StubStore::default().with_sprite(sprite_entity(sprite_id, owner));
        let state = AppState::new(AppConfig::default());
        state.set_sprite_store(Arc::new(store)).await;

        let request = UpdateSpriteRequest {
            name: Some("Hijacked".into()),
            description: None,
            category: None,
            tags: None,
        };
        let result = update_sprite(&state, Uuid::new_v4(), sprite_id, request).await;
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
    }

    #[tokio::test]
    async fn upload_rejects_icon_overflow() {
        let state = AppState::new(AppConfig::default());
        state.set_sprite_store(Arc::new(StubStore::default())).await;

        let icon = crate::dto::sprite::IconInput {
            name: "dot".into(),
            svg: "<svg viewBox=\"0 0 1 1\"/>".into(),
        };
        let request = CreateSpriteRequest {
            name: "Too big".into(),
            description: "overflow".into(),
            category: "misc".into(),
            tags: vec![],
            icons: vec![
                icon;
                state.config().max_icons_per_sprite() + 1
            ],
        };
        let result = create_sprite(&state, Uuid::new_v4(), request).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
}
