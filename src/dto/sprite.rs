//! DTO definitions for the sprite catalogue endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    dao::models::{IconEntity, PageEntity, SpriteEntity, SpriteSortKey},
    dto::{
        common::{PageMeta, SortOrderParam, UserSummary},
        format_system_time,
        validation::{validate_svg_markup, validate_tag},
    },
};

/// Payload used to upload a new sprite together with its icons.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateSpriteRequest {
    /// Display name of the collection.
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    /// Free-form description.
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    /// Category label.
    #[validate(length(min = 1, max = 40))]
    pub category: String,
    /// Tags attached to the sprite.
    #[serde(default)]
    #[validate(custom(function = validate_tag_list))]
    pub tags: Vec<String>,
    /// Icons uploaded with the sprite; at least one is required.
    #[validate(length(min = 1), nested)]
    pub icons: Vec<IconInput>,
}

/// Incoming icon definition inside an upload or an ad-hoc download.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct IconInput {
    /// Display name for the icon.
    pub name: String,
    /// Standalone SVG markup.
    pub svg: String,
}

impl Validate for IconInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.is_empty() || self.name.len() > 80 {
            let mut err = ValidationError::new("icon_name_length");
            err.message = Some("Icon names must be 1 to 80 characters".into());
            errors.add("name", err);
        }

        if let Err(err) = validate_svg_markup(&self.svg) {
            errors.add("svg", err);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Partial metadata update for an existing sprite.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateSpriteRequest {
    /// Replacement display name.
    #[validate(length(min = 1, max = 80))]
    pub name: Option<String>,
    /// Replacement description.
    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,
    /// Replacement category label.
    #[validate(length(min = 1, max = 40))]
    pub category: Option<String>,
    /// Replacement tag set.
    #[validate(custom(function = validate_tag_list))]
    pub tags: Option<Vec<String>>,
}

/// Query accepted by the sprite listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SpriteListQuery {
    /// Restrict to one category.
    pub category: Option<String>,
    /// Restrict to one owner.
    pub user_id: Option<Uuid>,
    /// Case-insensitive substring over name and description.
    pub search: Option<String>,
    /// Comma-separated tags the sprite must all carry.
    pub tags: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<u64>,
    /// Rows per page (default and cap are configuration driven).
    pub page_size: Option<u64>,
    /// Sort key (default `created_at`).
    pub sort_by: Option<SpriteSortParam>,
    /// Sort direction (default `desc`).
    pub sort_order: Option<SortOrderParam>,
}

/// Sort keys accepted by the sprite listing.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpriteSortParam {
    /// Newest (or oldest) first.
    #[default]
    CreatedAt,
    /// Most (or least) downloaded first.
    Downloads,
}

impl From<SpriteSortParam> for SpriteSortKey {
    fn from(value: SpriteSortParam) -> Self {
        match value {
            SpriteSortParam::CreatedAt => SpriteSortKey::CreatedAt,
            SpriteSortParam::Downloads => SpriteSortKey::Downloads,
        }
    }
}

/// Sprite projection returned by listings and as the detail header.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct SpriteSummary {
    /// Stable identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Category label.
    pub category: String,
    /// Tags attached to the sprite.
    pub tags: Vec<String>,
    /// Download counter.
    pub download_count: i64,
    /// Owning user.
    pub owner: UserSummary,
    /// Total number of icons.
    pub icon_count: u64,
    /// Number of favourite marks.
    pub favourite_count: u64,
    /// Whether the calling session user favourited this sprite.
    pub is_favourite: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-update timestamp.
    pub updated_at: String,
}

impl From<SpriteEntity> for SpriteSummary {
    fn from(entity: SpriteEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            tags: entity.tags,
            download_count: entity.download_count,
            owner: entity.owner.into(),
            icon_count: entity.icon_count,
            favourite_count: entity.favourite_count,
            is_favourite: entity.is_favourite,
            created_at: format_system_time(entity.created_at),
            updated_at: format_system_time(entity.updated_at),
        }
    }
}

/// Icon projection inside sprite-scoped responses.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct IconSummary {
    /// Stable identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Standalone SVG markup.
    pub svg: String,
    /// Parent sprite.
    pub sprite_id: Uuid,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<IconEntity> for IconSummary {
    fn from(entity: IconEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            svg: entity.svg,
            sprite_id: entity.sprite_id,
            created_at: format_system_time(entity.created_at),
        }
    }
}

/// Response for the sprite listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct SpriteListResponse {
    /// Sprites for the requested page.
    pub sprites: Vec<SpriteSummary>,
    /// Pagination envelope.
    pub meta: PageMeta,
}

/// Response for the sprite detail endpoint: metadata plus the first page of
/// icons so the detail view renders without a second round trip.
#[derive(Debug, Serialize, ToSchema)]
pub struct SpriteDetailResponse {
    /// Sprite metadata.
    #[serde(flatten)]
    pub sprite: SpriteSummary,
    /// First page of icons in upload order.
    pub icons: Vec<IconSummary>,
    /// Total number of icons in the sprite.
    pub total_icons: u64,
    /// Whether more icons exist beyond the embedded page.
    pub has_more_icons: bool,
}

impl SpriteDetailResponse {
    /// Combine a decorated sprite with its first icon page.
    pub fn new(sprite: SpriteEntity, icons: PageEntity<IconEntity>) -> Self {
        let total_icons = icons.total;
        let embedded: Vec<IconSummary> = icons.items.into_iter().map(Into::into).collect();
        let has_more_icons = (embedded.len() as u64) < total_icons;
        Self {
            sprite: sprite.into(),
            icons: embedded,
            total_icons,
            has_more_icons,
        }
    }
}

/// Response for the paginated per-sprite icon feed.
#[derive(Debug, Serialize, ToSchema)]
pub struct SpriteIconsResponse {
    /// Icons for the requested page, in upload order.
    pub icons: Vec<IconSummary>,
    /// Pagination envelope.
    pub meta: PageMeta,
}

/// Validate every tag in a request tag list.
fn validate_tag_list(tags: &Vec<String>) -> Result<(), ValidationError> {
    for tag in tags {
        validate_tag(tag)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateSpriteRequest {
        CreateSpriteRequest {
            name: "Arrows".into(),
            description: "Directional arrows".into(),
            category: "navigation".into(),
            tags: vec!["ui".into(), "arrows".into()],
            icons: vec![IconInput {
                name: "arrow-up".into(),
                svg: "<svg viewBox=\"0 0 24 24\"><path d=\"M12 4l8 8\"/></svg>".into(),
            }],
        }
    }

    #[test]
    fn accepts_valid_upload() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_empty_icon_list() {
        let mut request = valid_request();
        request.icons.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_non_svg_icon() {
        let mut request = valid_request();
        request.icons[0].svg = "<p>hello</p>".into();
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_bad_tags() {
        let mut request = valid_request();
        request.tags.push("Not A Tag!".into());
        assert!(request.validate().is_err());
    }
}
