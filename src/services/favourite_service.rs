use uuid::Uuid;

use crate::{error::ServiceError, state::SharedState};

/// Mark a sprite as favourite for `user_id`; repeating the call is a no-op.
pub async fn add_favourite(
    state: &SharedState,
    user_id: Uuid,
    sprite_id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_sprite_store().await?;

    if store.find_sprite(sprite_id, None).await?.is_none() {
        return Err(ServiceError::NotFound(format!(
            "sprite `{sprite_id}` not found"
        )));
    }

    store.add_favourite(user_id, sprite_id).await?;
    Ok(())
}

/// Remove a favourite mark; unknown marks are silently ignored.
pub async fn remove_favourite(
    state: &SharedState,
    user_id: Uuid,
    sprite_id: Uuid,
) -> Result<(), ServiceError> {
    let store = state.require_sprite_store().await?;
    store.remove_favourite(user_id, sprite_id).await?;
    Ok(())
}
