#[cfg(feature = "sql-store")]
pub mod sql;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::models::{
    IconEntity, IconFilter, IconListItemEntity, NewSpriteEntity, NewUserEntity, PageEntity,
    SessionEntity, SpriteEntity, SpriteFilter, SpritePatchEntity, StatsEntity, UserEntity,
};
use crate::dao::storage::StorageResult;

/// Abstraction over the persistence layer for the sprite catalogue.
///
/// Every method returns a `'static` future so callers can hold a store
/// handle without borrowing the trait object across awaits.
pub trait SpriteStore: Send + Sync {
    /// Persist a sprite together with its icons and return the new id.
    fn create_sprite(&self, sprite: NewSpriteEntity) -> BoxFuture<'static, StorageResult<Uuid>>;
    /// Fetch one sprite decorated for `session_user`, if it exists.
    fn find_sprite(
        &self,
        id: Uuid,
        session_user: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Option<SpriteEntity>>>;
    /// Page through sprites matching `filter`.
    fn list_sprites(
        &self,
        filter: SpriteFilter,
    ) -> BoxFuture<'static, StorageResult<PageEntity<SpriteEntity>>>;
    /// Apply a partial metadata update; `false` when the sprite is unknown.
    fn update_sprite(
        &self,
        id: Uuid,
        patch: SpritePatchEntity,
    ) -> BoxFuture<'static, StorageResult<bool>>;
    /// Delete a sprite and everything hanging off it; `false` when unknown.
    fn delete_sprite(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    /// Page through the icons of one sprite in upload order.
    fn list_sprite_icons(
        &self,
        sprite_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> BoxFuture<'static, StorageResult<PageEntity<IconEntity>>>;
    /// Every icon of one sprite in upload order, for sprite assembly.
    fn sprite_icons(&self, sprite_id: Uuid) -> BoxFuture<'static, StorageResult<Vec<IconEntity>>>;
    /// Page through the global icon search.
    fn list_icons(
        &self,
        filter: IconFilter,
    ) -> BoxFuture<'static, StorageResult<PageEntity<IconListItemEntity>>>;

    /// Bump the download counter; `false` when the sprite is unknown.
    fn increment_downloads(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>>;

    /// Mark a sprite as favourite for a user (idempotent).
    fn add_favourite(
        &self,
        user_id: Uuid,
        sprite_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<()>>;
    /// Remove a favourite mark (idempotent).
    fn remove_favourite(
        &self,
        user_id: Uuid,
        sprite_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<()>>;

    /// Distinct categories in ascending order.
    fn list_categories(&self) -> BoxFuture<'static, StorageResult<Vec<String>>>;
    /// Tag sets of all sprites, one row per sprite, in creation order.
    fn sprite_tag_rows(&self) -> BoxFuture<'static, StorageResult<Vec<Vec<String>>>>;
    /// Aggregate catalogue counters.
    fn stats(&self) -> BoxFuture<'static, StorageResult<StatsEntity>>;

    /// Create an account; callers pre-check username/email uniqueness.
    fn create_user(&self, user: NewUserEntity) -> BoxFuture<'static, StorageResult<UserEntity>>;
    /// Look up an account by id.
    fn find_user(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<UserEntity>>>;
    /// Look up an account by its unique username.
    fn find_user_by_username(
        &self,
        username: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>>;
    /// Look up an account by its unique email.
    fn find_user_by_email(
        &self,
        email: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>>;

    /// Persist a freshly issued session.
    fn insert_session(&self, session: SessionEntity) -> BoxFuture<'static, StorageResult<()>>;
    /// Look up a session by token; expiry is the caller's concern.
    fn find_session(
        &self,
        token: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<SessionEntity>>>;
    /// Drop a session (logout or expiry purge).
    fn delete_session(&self, token: Uuid) -> BoxFuture<'static, StorageResult<()>>;

    /// Cheap readiness probe used by the supervisor and `/healthcheck`.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Re-establish the underlying connection after a failed health check.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
