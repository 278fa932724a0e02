//! In-memory [`SpriteStore`] double backing the service unit tests.

use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::dao::{
    models::{
        IconEntity, IconFilter, IconListItemEntity, NewSpriteEntity, NewUserEntity, PageEntity,
        SessionEntity, SpriteEntity, SpriteFilter, SpritePatchEntity, StatsEntity, UserEntity,
    },
    sprite_store::SpriteStore,
    storage::StorageResult,
};

/// Canned-response store: holds at most one sprite, one icon page, and
/// fully working user/session tables.
#[derive(Default, Clone)]
pub struct StubStore {
    inner: Arc<Mutex<StubInner>>,
}

#[derive(Default)]
struct StubInner {
    sprite: Option<SpriteEntity>,
    icon_page: Option<PageEntity<IconEntity>>,
    users: Vec<UserEntity>,
    sessions: Vec<SessionEntity>,
}

impl StubStore {
    /// Serve this sprite from every sprite lookup.
    pub fn with_sprite(self, sprite: SpriteEntity) -> Self {
        self.inner.lock().unwrap().sprite = Some(sprite);
        self
    }

    /// Serve this page from every icon listing.
    pub fn with_icon_page(self, page: PageEntity<IconEntity>) -> Self {
        self.inner.lock().unwrap().icon_page = Some(page);
        self
    }

    fn sprite_matching(&self, id: Uuid) -> Option<SpriteEntity> {
        self.inner
            .lock()
            .unwrap()
            .sprite
            .clone()
            .filter(|sprite| sprite.id == id)
    }
}

impl SpriteStore for StubStore {
    fn create_sprite(&self, _sprite: NewSpriteEntity) -> BoxFuture<'static, StorageResult<Uuid>> {
        let id = self
            .inner
            .lock()
            .unwrap()
            .sprite
            .as_ref()
            .map(|sprite| sprite.id)
            .unwrap_or_else(Uuid::new_v4);
        Box::pin(async move { Ok(id) })
    }

    fn find_sprite(
        &self,
        id: Uuid,
        _session_user: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Option<SpriteEntity>>> {
        let found = self.sprite_matching(id);
        Box::pin(async move { Ok(found) })
    }

    fn list_sprites(
        &self,
        _filter: SpriteFilter,
    ) -> BoxFuture<'static, StorageResult<PageEntity<SpriteEntity>>> {
        let items: Vec<SpriteEntity> = self.inner.lock().unwrap().sprite.clone().into_iter().collect();
        let total = items.len() as u64;
        Box::pin(async move { Ok(PageEntity { items, total }) })
    }

    fn update_sprite(
        &self,
        id: Uuid,
        _patch: SpritePatchEntity,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let found = self.sprite_matching(id).is_some();
        Box::pin(async move { Ok(found) })
    }

    fn delete_sprite(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let found = self.sprite_matching(id).is_some();
        Box::pin(async move { Ok(found) })
    }

    fn list_sprite_icons(
        &self,
        _sprite_id: Uuid,
        _page: u64,
        _page_size: u64,
    ) -> BoxFuture<'static, StorageResult<PageEntity<IconEntity>>> {
        let page = self
            .inner
            .lock()
            .unwrap()
            .icon_page
            .clone()
            .unwrap_or(PageEntity {
                items: Vec::new(),
                total: 0,
            });
        Box::pin(async move { Ok(page) })
    }

    fn sprite_icons(&self, _sprite_id: Uuid) -> BoxFuture<'static, StorageResult<Vec<IconEntity>>> {
        let icons = self
            .inner
            .lock()
            .unwrap()
            .icon_page
            .clone()
            .map(|page| page.items)
            .unwrap_or_default();
        Box::pin(async move { Ok(icons) })
    }

    fn list_icons(
        &self,
        _filter: IconFilter,
    ) -> BoxFuture<'static, StorageResult<PageEntity<IconListItemEntity>>> {
        Box::pin(async move {
            Ok(PageEntity {
                items: Vec::new(),
                total: 0,
            })
        })
    }

    fn increment_downloads(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let found = self.sprite_matching(id).is_some();
        Box::pin(async move { Ok(found) })
    }

    fn add_favourite(
        &self,
        _user_id: Uuid,
        _sprite_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async move { Ok(()) })
    }

    fn remove_favourite(
        &self,
        _user_id: Uuid,
        _sprite_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async move { Ok(()) })
    }

    fn list_categories(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let categories = self
            .inner
            .lock()
            .unwrap()
            .sprite
            .as_ref()
            .map(|sprite| vec![sprite.category.clone()])
            .unwrap_or_default();
        Box::pin(async move { Ok(categories) })
    }

    fn sprite_tag_rows(&self) -> BoxFuture<'static, StorageResult<Vec<Vec<String>>>> {
        let rows = self
            .inner
            .lock()
            .unwrap()
            .sprite
            .as_ref()
            .map(|sprite| vec![sprite.tags.clone()])
            .unwrap_or_default();
        Box::pin(async move { Ok(rows) })
    }

    fn stats(&self) -> BoxFuture<'static, StorageResult<StatsEntity>> {
        Box::pin(async move { Ok(StatsEntity::default()) })
    }

    fn create_user(&self, user: NewUserEntity) -> BoxFuture<'static, StorageResult<UserEntity>> {
        let entity = UserEntity {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            password_hash: user.password_hash,
            created_at: SystemTime::now(),
        };
        self.inner.lock().unwrap().users.push(entity.clone());
        Box::pin(async move { Ok(entity) })
    }

    fn find_user(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let found = self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned();
        Box::pin(async move { Ok(found) })
    }

    fn find_user_by_username(
        &self,
        username: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let found = self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned();
        Box::pin(async move { Ok(found) })
    }

    fn find_user_by_email(
        &self,
        email: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let found = self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned();
        Box::pin(async move { Ok(found) })
    }

    fn insert_session(&self, session: SessionEntity) -> BoxFuture<'static, StorageResult<()>> {
        self.inner.lock().unwrap().sessions.push(session);
        Box::pin(async move { Ok(()) })
    }

    fn find_session(
        &self,
        token: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<SessionEntity>>> {
        let found = self
            .inner
            .lock()
            .unwrap()
            .sessions
            .iter()
            .find(|session| session.token == token)
            .cloned();
        Box::pin(async move { Ok(found) })
    }

    fn delete_session(&self, token: Uuid) -> BoxFuture<'static, StorageResult<()>> {
        self.inner
            .lock()
            .unwrap()
            .sessions
            .retain(|session| session.token != token);
        Box::pin(async move { Ok(()) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async move { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async move { Ok(()) })
    }
}
