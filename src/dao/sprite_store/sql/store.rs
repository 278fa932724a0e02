use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use futures::future::BoxFuture;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::config::SqlConfig;
use super::connection::establish_connection;
use super::entities::{favourites, icons, sessions, sprites, sprites::TagList, users};
use super::error::{SqlDaoError, SqlResult};
use crate::dao::{
    models::{
        IconEntity, IconFilter, IconListItemEntity, IconSortKey, NewSpriteEntity, NewUserEntity,
        PageEntity, SessionEntity, SortOrder, SpriteBriefEntity, SpriteEntity, SpriteFilter,
        SpritePatchEntity, SpriteSortKey, StatsEntity, UserEntity, UserSummaryEntity,
    },
    sprite_store::SpriteStore,
    storage::StorageResult,
};

/// SQL-backed implementation of [`SpriteStore`].
#[derive(Clone)]
pub struct SqlSpriteStore {
    inner: Arc<SqlInner>,
}

struct SqlInner {
    state: RwLock<DatabaseConnection>,
    config: SqlConfig,
}

impl SqlSpriteStore {
    /// Connect to the configured database, running migrations on the way.
    pub async fn connect(config: SqlConfig) -> SqlResult<Self> {
        let connection = establish_connection(&config).await?;
        Ok(Self {
            inner: Arc::new(SqlInner {
                state: RwLock::new(connection),
                config,
            }),
        })
    }

    async fn db(&self) -> DatabaseConnection {
        self.inner.state.read().await.clone()
    }

    async fn insert_sprite(&self, sprite: NewSpriteEntity) -> SqlResult<Uuid> {
        let db = self.db().await;
        let txn = db
            .begin()
            .await
            .map_err(|source| SqlDaoError::query("create_sprite", source))?;

        let sprite_id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();

        sprites::ActiveModel {
            id: Set(sprite_id),
            name: Set(sprite.name),
            description: Set(sprite.description),
            category: Set(sprite.category),
            tags: Set(TagList(sprite.tags)),
            download_count: Set(0),
            user_id: Set(sprite.user_id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|source| SqlDaoError::query("create_sprite", source))?;

        for (index, icon) in sprite.icons.into_iter().enumerate() {
            // Offset each icon by a microsecond so upload order survives the
            // shared insertion timestamp.
            let created_at = now + Duration::from_micros(index as u64);
            icons::ActiveModel {
                id: Set(Uuid::new_v4()),
                name: Set(icon.name),
                svg: Set(icon.svg),
                sprite_id: Set(sprite_id),
                user_id: Set(sprite.user_id),
                created_at: Set(created_at),
            }
            .insert(&txn)
            .await
            .map_err(|source| SqlDaoError::query("create_sprite", source))?;
        }

        txn.commit()
            .await
            .map_err(|source| SqlDaoError::query("create_sprite", source))?;

        Ok(sprite_id)
    }

    async fn fetch_sprite(
        &self,
        id: Uuid,
        session_user: Option<Uuid>,
    ) -> SqlResult<Option<SpriteEntity>> {
        let db = self.db().await;
        let Some(model) = sprites::Entity::find_by_id(id)
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("find_sprite", source))?
        else {
            return Ok(None);
        };

        let decorated = self.decorate_sprites(&db, vec![model], session_user).await?;
        Ok(decorated.into_iter().next())
    }

    async fn query_sprites(&self, filter: SpriteFilter) -> SqlResult<PageEntity<SpriteEntity>> {
        let db = self.db().await;

        let mut condition = Condition::all();
        if let Some(category) = &filter.category {
            condition = condition.add(sprites::Column::Category.eq(category.clone()));
        }
        if let Some(user_id) = filter.user_id {
            condition = condition.add(sprites::Column::UserId.eq(user_id));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(sprites::Column::Name.contains(search))
                    .add(sprites::Column::Description.contains(search)),
            );
        }
        // Tags live in a JSON text column; requiring one quoted match per tag
        // gives "must carry every tag" semantics. Tag values are restricted to
        // a slug charset at the validation layer, so LIKE metacharacters
        // cannot sneak in.
        for tag in &filter.tags {
            condition = condition.add(sprites::Column::Tags.like(format!("%\"{tag}\"%")));
        }

        let total = sprites::Entity::find()
            .filter(condition.clone())
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_sprites", source))?;

        let sort_column = match filter.sort_by {
            SpriteSortKey::CreatedAt => sprites::Column::CreatedAt,
            SpriteSortKey::Downloads => sprites::Column::DownloadCount,
        };
        let order = match filter.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let models = sprites::Entity::find()
            .filter(condition)
            .order_by(sort_column, order)
            .offset(filter.page.saturating_sub(1) * filter.page_size)
            .limit(filter.page_size)
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_sprites", source))?;

        let items = self
            .decorate_sprites(&db, models, filter.session_user)
            .await?;

        Ok(PageEntity { items, total })
    }

    /// Attach owner summaries, icon/favourite counters, and the caller's
    /// favourite flag to a batch of sprite rows.
    async fn decorate_sprites(
        &self,
        db: &DatabaseConnection,
        models: Vec<sprites::Model>,
        session_user: Option<Uuid>,
    ) -> SqlResult<Vec<SpriteEntity>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids: Vec<Uuid> = models.iter().map(|model| model.user_id).collect();
        let owners: HashMap<Uuid, UserSummaryEntity> = users::Entity::find()
            .filter(users::Column::Id.is_in(owner_ids))
            .all(db)
            .await
            .map_err(|source| SqlDaoError::query("list_sprites", source))?
            .into_iter()
            .map(|user| (user.id, user_summary(user)))
            .collect();

        let sprite_ids: Vec<Uuid> = models.iter().map(|model| model.id).collect();
        let favourited: HashSet<Uuid> = match session_user {
            Some(user_id) => favourites::Entity::find()
                .filter(favourites::Column::UserId.eq(user_id))
                .filter(favourites::Column::SpriteId.is_in(sprite_ids))
                .all(db)
                .await
                .map_err(|source| SqlDaoError::query("list_sprites", source))?
                .into_iter()
                .map(|favourite| favourite.sprite_id)
                .collect(),
            None => HashSet::new(),
        };

        let mut entities = Vec::with_capacity(models.len());
        for model in models {
            let owner = owners
                .get(&model.user_id)
                .cloned()
                .ok_or(SqlDaoError::MissingOwner { sprite: model.id })?;

            let icon_count = icons::Entity::find()
                .filter(icons::Column::SpriteId.eq(model.id))
                .count(db)
                .await
                .map_err(|source| SqlDaoError::query("list_sprites", source))?;
            let favourite_count = favourites::Entity::find()
                .filter(favourites::Column::SpriteId.eq(model.id))
                .count(db)
                .await
                .map_err(|source| SqlDaoError::query("list_sprites", source))?;

            entities.push(SpriteEntity {
                id: model.id,
                name: model.name,
                description: model.description,
                category: model.category,
                tags: model.tags.0,
                download_count: model.download_count,
                owner,
                icon_count,
                favourite_count,
                is_favourite: favourited.contains(&model.id),
                created_at: SystemTime::from(model.created_at),
                updated_at: SystemTime::from(model.updated_at),
            });
        }

        Ok(entities)
    }

    async fn apply_sprite_patch(&self, id: Uuid, patch: SpritePatchEntity) -> SqlResult<bool> {
        let db = self.db().await;

        let active = sprites::ActiveModel {
            id: Set(id),
            name: patch.name.map_or(sea_orm::NotSet, Set),
            description: patch.description.map_or(sea_orm::NotSet, Set),
            category: patch.category.map_or(sea_orm::NotSet, Set),
            tags: patch.tags.map(TagList).map_or(sea_orm::NotSet, Set),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };

        match active.update(&db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(source) => Err(SqlDaoError::query("update_sprite", source)),
        }
    }

    async fn remove_sprite(&self, id: Uuid) -> SqlResult<bool> {
        let db = self.db().await;
        let txn = db
            .begin()
            .await
            .map_err(|source| SqlDaoError::query("delete_sprite", source))?;

        favourites::Entity::delete_many()
            .filter(favourites::Column::SpriteId.eq(id))
            .exec(&txn)
            .await
            .map_err(|source| SqlDaoError::query("delete_sprite", source))?;
        icons::Entity::delete_many()
            .filter(icons::Column::SpriteId.eq(id))
            .exec(&txn)
            .await
            .map_err(|source| SqlDaoError::query("delete_sprite", source))?;
        let result = sprites::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|source| SqlDaoError::query("delete_sprite", source))?;

        txn.commit()
            .await
            .map_err(|source| SqlDaoError::query("delete_sprite", source))?;

        Ok(result.rows_affected > 0)
    }

    async fn query_sprite_icons(
        &self,
        sprite_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> SqlResult<PageEntity<IconEntity>> {
        let db = self.db().await;

        let total = icons::Entity::find()
            .filter(icons::Column::SpriteId.eq(sprite_id))
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_sprite_icons", source))?;

        let items = icons::Entity::find()
            .filter(icons::Column::SpriteId.eq(sprite_id))
            .order_by_asc(icons::Column::CreatedAt)
            .offset(page.saturating_sub(1) * page_size)
            .limit(page_size)
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_sprite_icons", source))?
            .into_iter()
            .map(icon_entity)
            .collect();

        Ok(PageEntity { items, total })
    }

    async fn all_sprite_icons(&self, sprite_id: Uuid) -> SqlResult<Vec<IconEntity>> {
        let db = self.db().await;
        let items = icons::Entity::find()
            .filter(icons::Column::SpriteId.eq(sprite_id))
            .order_by_asc(icons::Column::CreatedAt)
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("sprite_icons", source))?
            .into_iter()
            .map(icon_entity)
            .collect();
        Ok(items)
    }

    async fn query_icons(&self, filter: IconFilter) -> SqlResult<PageEntity<IconListItemEntity>> {
        let db = self.db().await;

        let mut condition = Condition::all();
        if let Some(search) = &filter.search {
            condition = condition.add(icons::Column::Name.contains(search));
        }

        let total = icons::Entity::find()
            .filter(condition.clone())
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_icons", source))?;

        let sort_column = match filter.sort_by {
            IconSortKey::CreatedAt => icons::Column::CreatedAt,
            IconSortKey::Name => icons::Column::Name,
        };
        let order = match filter.sort_order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let models = icons::Entity::find()
            .filter(condition)
            .order_by(sort_column, order)
            .offset(filter.page.saturating_sub(1) * filter.page_size)
            .limit(filter.page_size)
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_icons", source))?;

        let owner_ids: Vec<Uuid> = models.iter().map(|model| model.user_id).collect();
        let owners: HashMap<Uuid, UserSummaryEntity> = users::Entity::find()
            .filter(users::Column::Id.is_in(owner_ids))
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_icons", source))?
            .into_iter()
            .map(|user| (user.id, user_summary(user)))
            .collect();

        let sprite_ids: Vec<Uuid> = models.iter().map(|model| model.sprite_id).collect();
        let parents: HashMap<Uuid, SpriteBriefEntity> = sprites::Entity::find()
            .filter(sprites::Column::Id.is_in(sprite_ids))
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_icons", source))?
            .into_iter()
            .map(|sprite| {
                (
                    sprite.id,
                    SpriteBriefEntity {
                        id: sprite.id,
                        name: sprite.name,
                        category: sprite.category,
                        tags: sprite.tags.0,
                    },
                )
            })
            .collect();

        let mut items = Vec::with_capacity(models.len());
        for model in models {
            let owner = owners
                .get(&model.user_id)
                .cloned()
                .ok_or(SqlDaoError::OrphanIcon { icon: model.id })?;
            let sprite = parents
                .get(&model.sprite_id)
                .cloned()
                .ok_or(SqlDaoError::OrphanIcon { icon: model.id })?;
            items.push(IconListItemEntity {
                icon: icon_entity(model),
                owner,
                sprite,
            });
        }

        Ok(PageEntity { items, total })
    }

    async fn bump_downloads(&self, id: Uuid) -> SqlResult<bool> {
        use sea_orm::sea_query::Expr;

        let db = self.db().await;
        let result = sprites::Entity::update_many()
            .col_expr(
                sprites::Column::DownloadCount,
                Expr::col(sprites::Column::DownloadCount).add(1),
            )
            .filter(sprites::Column::Id.eq(id))
            .exec(&db)
            .await
            .map_err(|source| SqlDaoError::query("increment_downloads", source))?;
        Ok(result.rows_affected > 0)
    }

    async fn insert_favourite(&self, user_id: Uuid, sprite_id: Uuid) -> SqlResult<()> {
        let db = self.db().await;
        let existing = favourites::Entity::find()
            .filter(favourites::Column::UserId.eq(user_id))
            .filter(favourites::Column::SpriteId.eq(sprite_id))
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("add_favourite", source))?;
        if existing.is_some() {
            return Ok(());
        }

        favourites::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            sprite_id: Set(sprite_id),
            created_at: Set(OffsetDateTime::now_utc()),
        }
        .insert(&db)
        .await
        .map_err(|source| SqlDaoError::query("add_favourite", source))?;
        Ok(())
    }

    async fn delete_favourite(&self, user_id: Uuid, sprite_id: Uuid) -> SqlResult<()> {
        let db = self.db().await;
        favourites::Entity::delete_many()
            .filter(favourites::Column::UserId.eq(user_id))
            .filter(favourites::Column::SpriteId.eq(sprite_id))
            .exec(&db)
            .await
            .map_err(|source| SqlDaoError::query("remove_favourite", source))?;
        Ok(())
    }

    async fn distinct_categories(&self) -> SqlResult<Vec<String>> {
        let db = self.db().await;
        sprites::Entity::find()
            .select_only()
            .column(sprites::Column::Category)
            .distinct()
            .order_by_asc(sprites::Column::Category)
            .into_tuple::<String>()
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("list_categories", source))
    }

    async fn all_tag_rows(&self) -> SqlResult<Vec<Vec<String>>> {
        let db = self.db().await;
        let rows = sprites::Entity::find()
            .select_only()
            .column(sprites::Column::Tags)
            .order_by_asc(sprites::Column::CreatedAt)
            .into_tuple::<TagList>()
            .all(&db)
            .await
            .map_err(|source| SqlDaoError::query("sprite_tag_rows", source))?;
        Ok(rows.into_iter().map(|tags| tags.0).collect())
    }

    async fn aggregate_stats(&self) -> SqlResult<StatsEntity> {
        let db = self.db().await;

        let total_sprites = sprites::Entity::find()
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("stats", source))?;
        let total_icons = icons::Entity::find()
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("stats", source))?;
        let total_users = users::Entity::find()
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("stats", source))?;
        let total_favourites = favourites::Entity::find()
            .count(&db)
            .await
            .map_err(|source| SqlDaoError::query("stats", source))?;

        let total_downloads: Option<i64> = sprites::Entity::find()
            .select_only()
            .column_as(sprites::Column::DownloadCount.sum(), "total")
            .into_tuple()
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("stats", source))?
            .flatten();

        Ok(StatsEntity {
            total_sprites,
            total_icons,
            total_users,
            total_downloads: total_downloads.unwrap_or(0).max(0) as u64,
            total_favourites,
        })
    }

    async fn insert_user(&self, user: NewUserEntity) -> SqlResult<UserEntity> {
        let db = self.db().await;
        let model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            display_name: Set(user.display_name),
            password_hash: Set(user.password_hash),
            created_at: Set(OffsetDateTime::now_utc()),
        }
        .insert(&db)
        .await
        .map_err(|source| SqlDaoError::query("create_user", source))?;
        Ok(user_entity(model))
    }

    async fn fetch_user(&self, id: Uuid) -> SqlResult<Option<UserEntity>> {
        let db = self.db().await;
        let model = users::Entity::find_by_id(id)
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("find_user", source))?;
        Ok(model.map(user_entity))
    }

    async fn fetch_user_by_username(&self, username: String) -> SqlResult<Option<UserEntity>> {
        let db = self.db().await;
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("find_user_by_username", source))?;
        Ok(model.map(user_entity))
    }

    async fn fetch_user_by_email(&self, email: String) -> SqlResult<Option<UserEntity>> {
        let db = self.db().await;
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("find_user_by_email", source))?;
        Ok(model.map(user_entity))
    }

    async fn store_session(&self, session: SessionEntity) -> SqlResult<()> {
        let db = self.db().await;
        sessions::ActiveModel {
            token: Set(session.token),
            user_id: Set(session.user_id),
            created_at: Set(OffsetDateTime::from(session.created_at)),
            expires_at: Set(OffsetDateTime::from(session.expires_at)),
        }
        .insert(&db)
        .await
        .map_err(|source| SqlDaoError::query("insert_session", source))?;
        Ok(())
    }

    async fn fetch_session(&self, token: Uuid) -> SqlResult<Option<SessionEntity>> {
        let db = self.db().await;
        let model = sessions::Entity::find_by_id(token)
            .one(&db)
            .await
            .map_err(|source| SqlDaoError::query("find_session", source))?;
        Ok(model.map(|session| SessionEntity {
            token: session.token,
            user_id: session.user_id,
            created_at: SystemTime::from(session.created_at),
            expires_at: SystemTime::from(session.expires_at),
        }))
    }

    async fn remove_session(&self, token: Uuid) -> SqlResult<()> {
        let db = self.db().await;
        sessions::Entity::delete_by_id(token)
            .exec(&db)
            .await
            .map_err(|source| SqlDaoError::query("delete_session", source))?;
        Ok(())
    }

    async fn ping(&self) -> SqlResult<()> {
        let db = self.db().await;
        db.ping()
            .await
            .map_err(|source| SqlDaoError::query("health_check", source))
    }

    async fn reconnect(&self) -> SqlResult<()> {
        let connection = establish_connection(&self.inner.config).await?;
        let mut guard = self.inner.state.write().await;
        *guard = connection;
        Ok(())
    }
}

fn user_entity(model: users::Model) -> UserEntity {
    UserEntity {
        id: model.id,
        username: model.username,
        email: model.email,
        display_name: model.display_name,
        password_hash: model.password_hash,
        created_at: SystemTime::from(model.created_at),
    }
}

fn user_summary(model: users::Model) -> UserSummaryEntity {
    UserSummaryEntity {
        id: model.id,
        username: model.username,
        display_name: model.display_name,
    }
}

fn icon_entity(model: icons::Model) -> IconEntity {
    IconEntity {
        id: model.id,
        name: model.name,
        svg: model.svg,
        sprite_id: model.sprite_id,
        user_id: model.user_id,
        created_at: SystemTime::from(model.created_at),
    }
}

impl SpriteStore for SqlSpriteStore {
    fn create_sprite(&self, sprite: NewSpriteEntity) -> BoxFuture<'static, StorageResult<Uuid>> {
        let store = self.clone();
        Box::pin(async move { store.insert_sprite(sprite).await.map_err(Into::into) })
    }

    fn find_sprite(
        &self,
        id: Uuid,
        session_user: Option<Uuid>,
    ) -> BoxFuture<'static, StorageResult<Option<SpriteEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.fetch_sprite(id, session_user).await.map_err(Into::into) })
    }

    fn list_sprites(
        &self,
        filter: SpriteFilter,
    ) -> BoxFuture<'static, StorageResult<PageEntity<SpriteEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.query_sprites(filter).await.map_err(Into::into) })
    }

    fn update_sprite(
        &self,
        id: Uuid,
        patch: SpritePatchEntity,
    ) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.apply_sprite_patch(id, patch).await.map_err(Into::into) })
    }

    fn delete_sprite(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.remove_sprite(id).await.map_err(Into::into) })
    }

    fn list_sprite_icons(
        &self,
        sprite_id: Uuid,
        page: u64,
        page_size: u64,
    ) -> BoxFuture<'static, StorageResult<PageEntity<IconEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .query_sprite_icons(sprite_id, page, page_size)
                .await
                .map_err(Into::into)
        })
    }

    fn sprite_icons(&self, sprite_id: Uuid) -> BoxFuture<'static, StorageResult<Vec<IconEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.all_sprite_icons(sprite_id).await.map_err(Into::into) })
    }

    fn list_icons(
        &self,
        filter: IconFilter,
    ) -> BoxFuture<'static, StorageResult<PageEntity<IconListItemEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.query_icons(filter).await.map_err(Into::into) })
    }

    fn increment_downloads(&self, id: Uuid) -> BoxFuture<'static, StorageResult<bool>> {
        let store = self.clone();
        Box::pin(async move { store.bump_downloads(id).await.map_err(Into::into) })
    }

    fn add_favourite(
        &self,
        user_id: Uuid,
        sprite_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .insert_favourite(user_id, sprite_id)
                .await
                .map_err(Into::into)
        })
    }

    fn remove_favourite(
        &self,
        user_id: Uuid,
        sprite_id: Uuid,
    ) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .delete_favourite(user_id, sprite_id)
                .await
                .map_err(Into::into)
        })
    }

    fn list_categories(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let store = self.clone();
        Box::pin(async move { store.distinct_categories().await.map_err(Into::into) })
    }

    fn sprite_tag_rows(&self) -> BoxFuture<'static, StorageResult<Vec<Vec<String>>>> {
        let store = self.clone();
        Box::pin(async move { store.all_tag_rows().await.map_err(Into::into) })
    }

    fn stats(&self) -> BoxFuture<'static, StorageResult<StatsEntity>> {
        let store = self.clone();
        Box::pin(async move { store.aggregate_stats().await.map_err(Into::into) })
    }

    fn create_user(&self, user: NewUserEntity) -> BoxFuture<'static, StorageResult<UserEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_user(user).await.map_err(Into::into) })
    }

    fn find_user(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.fetch_user(id).await.map_err(Into::into) })
    }

    fn find_user_by_username(
        &self,
        username: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let store = self.clone();
        Box::pin(async move {
            store
                .fetch_user_by_username(username)
                .await
                .map_err(Into::into)
        })
    }

    fn find_user_by_email(
        &self,
        email: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.fetch_user_by_email(email).await.map_err(Into::into) })
    }

    fn insert_session(&self, session: SessionEntity) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.store_session(session).await.map_err(Into::into) })
    }

    fn find_session(
        &self,
        token: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<SessionEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.fetch_session(token).await.map_err(Into::into) })
    }

    fn delete_session(&self, token: Uuid) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.remove_session(token).await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.reconnect().await.map_err(Into::into) })
    }
}
