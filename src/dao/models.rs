use std::time::SystemTime;

use uuid::Uuid;

/// Account record stored in persistence, including credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    /// Stable identifier for the user.
    pub id: Uuid,
    /// Unique login handle (lowercase slug).
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Name shown next to sprites and icons.
    pub display_name: String,
    /// Argon2 PHC hash of the user's password.
    pub password_hash: String,
    /// Account creation timestamp.
    pub created_at: SystemTime,
}

/// Owner projection embedded in sprite and icon records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummaryEntity {
    /// Stable identifier for the user.
    pub id: Uuid,
    /// Unique login handle.
    pub username: String,
    /// Name shown next to sprites and icons.
    pub display_name: String,
}

impl From<UserEntity> for UserSummaryEntity {
    fn from(value: UserEntity) -> Self {
        Self {
            id: value.id,
            username: value.username,
            display_name: value.display_name,
        }
    }
}

/// Input record for a brand-new account.
#[derive(Debug, Clone)]
pub struct NewUserEntity {
    /// Unique login handle.
    pub username: String,
    /// Unique contact address.
    pub email: String,
    /// Name shown next to sprites and icons.
    pub display_name: String,
    /// Argon2 PHC hash of the user's password.
    pub password_hash: String,
}

/// Sprite record decorated with its owner, counters, and the caller's
/// favourite flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteEntity {
    /// Primary key of the sprite.
    pub id: Uuid,
    /// Display name of the collection.
    pub name: String,
    /// Free-form description shown on the detail page.
    pub description: String,
    /// Single category label used for filtering.
    pub category: String,
    /// Tag vocabulary attached to the sprite.
    pub tags: Vec<String>,
    /// Number of times the combined sprite file was downloaded.
    pub download_count: i64,
    /// Owning user.
    pub owner: UserSummaryEntity,
    /// Total number of icons in the collection.
    pub icon_count: u64,
    /// Number of users that favourited this sprite.
    pub favourite_count: u64,
    /// Whether the requesting session user favourited this sprite.
    pub is_favourite: bool,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last metadata update.
    pub updated_at: SystemTime,
}

/// Input record for a sprite upload, icons included.
#[derive(Debug, Clone)]
pub struct NewSpriteEntity {
    /// Display name of the collection.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Single category label.
    pub category: String,
    /// Tag vocabulary attached to the sprite.
    pub tags: Vec<String>,
    /// Owning user.
    pub user_id: Uuid,
    /// Icons uploaded together with the sprite.
    pub icons: Vec<NewIconEntity>,
}

/// Partial metadata update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct SpritePatchEntity {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement category label.
    pub category: Option<String>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
}

/// Single icon belonging to a sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntity {
    /// Primary key of the icon.
    pub id: Uuid,
    /// Display name, also the symbol id when sprites are assembled.
    pub name: String,
    /// Standalone SVG markup for this icon.
    pub svg: String,
    /// Sprite this icon belongs to.
    pub sprite_id: Uuid,
    /// User that uploaded the icon.
    pub user_id: Uuid,
    /// Creation timestamp; drives the stable icon ordering.
    pub created_at: SystemTime,
}

/// Input record for an icon uploaded as part of a sprite.
#[derive(Debug, Clone)]
pub struct NewIconEntity {
    /// Display name for the icon.
    pub name: String,
    /// Standalone SVG markup.
    pub svg: String,
}

/// Parent sprite projection embedded in global icon listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteBriefEntity {
    /// Primary key of the sprite.
    pub id: Uuid,
    /// Display name of the collection.
    pub name: String,
    /// Category label of the collection.
    pub category: String,
    /// Tags of the collection.
    pub tags: Vec<String>,
}

/// Icon row in the global icon search, with owner and parent sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconListItemEntity {
    /// The icon itself.
    pub icon: IconEntity,
    /// Owning user.
    pub owner: UserSummaryEntity,
    /// Parent sprite summary.
    pub sprite: SpriteBriefEntity,
}

/// Authenticated session persisted alongside the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntity {
    /// Opaque session token handed to the client in a cookie.
    pub token: Uuid,
    /// User the session authenticates.
    pub user_id: Uuid,
    /// Session creation timestamp.
    pub created_at: SystemTime,
    /// Instant after which the session is rejected.
    pub expires_at: SystemTime,
}

/// Aggregate counters shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsEntity {
    /// Number of sprites in the catalogue.
    pub total_sprites: u64,
    /// Number of icons across all sprites.
    pub total_icons: u64,
    /// Number of registered users.
    pub total_users: u64,
    /// Sum of all sprite download counters.
    pub total_downloads: u64,
    /// Number of favourite marks across all sprites.
    pub total_favourites: u64,
}

/// Sort key accepted by the sprite listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteSortKey {
    /// Order by creation timestamp.
    #[default]
    CreatedAt,
    /// Order by download counter.
    Downloads,
}

/// Sort key accepted by the global icon listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSortKey {
    /// Order by creation timestamp.
    #[default]
    CreatedAt,
    /// Order by icon name.
    Name,
}

/// Sort direction shared by both listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

/// Filter and pagination options for the sprite listing.
#[derive(Debug, Clone, Default)]
pub struct SpriteFilter {
    /// Restrict to one category.
    pub category: Option<String>,
    /// Restrict to one owner.
    pub user_id: Option<Uuid>,
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
    /// Sprite must carry every listed tag.
    pub tags: Vec<String>,
    /// 1-based page number.
    pub page: u64,
    /// Page size, already clamped by the caller.
    pub page_size: u64,
    /// Sort key.
    pub sort_by: SpriteSortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Session user used to decorate `is_favourite`.
    pub session_user: Option<Uuid>,
}

/// Filter and pagination options for the global icon listing.
#[derive(Debug, Clone, Default)]
pub struct IconFilter {
    /// Case-insensitive substring over the icon name.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: u64,
    /// Page size, already clamped by the caller.
    pub page_size: u64,
    /// Sort key.
    pub sort_by: IconSortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

/// One page of rows plus the unpaginated total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntity<T> {
    /// Rows for the requested page.
    pub items: Vec<T>,
    /// Total number of rows matching the filter.
    pub total: u64,
}
