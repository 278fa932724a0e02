//! DTO definitions for the global icon search and symbol extraction.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::{IconListItemEntity, IconSortKey, SpriteBriefEntity},
    dto::{
        common::{PageMeta, SortOrderParam, UserSummary},
        format_system_time,
        validation::validate_svg_markup,
    },
    svg::sprite::SpriteIcon,
};

/// Query accepted by the global icon listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IconListQuery {
    /// Case-insensitive substring over the icon name.
    pub search: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<u64>,
    /// Rows per page (default and cap are configuration driven).
    pub page_size: Option<u64>,
    /// Sort key (default `created_at`).
    pub sort_by: Option<IconSortParam>,
    /// Sort direction (default `desc`).
    pub sort_order: Option<SortOrderParam>,
}

/// Sort keys accepted by the global icon listing.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconSortParam {
    /// Newest (or oldest) first.
    #[default]
    CreatedAt,
    /// Alphabetical by icon name.
    Name,
}

impl From<IconSortParam> for IconSortKey {
    fn from(value: IconSortParam) -> Self {
        match value {
            IconSortParam::CreatedAt => IconSortKey::CreatedAt,
            IconSortParam::Name => IconSortKey::Name,
        }
    }
}

/// Parent sprite projection embedded in icon search rows.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct SpriteBrief {
    /// Stable identifier of the sprite.
    pub id: Uuid,
    /// Display name of the sprite.
    pub name: String,
    /// Category label of the sprite.
    pub category: String,
    /// Tags of the sprite.
    pub tags: Vec<String>,
}

impl From<SpriteBriefEntity> for SpriteBrief {
    fn from(value: SpriteBriefEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            category: value.category,
            tags: value.tags,
        }
    }
}

/// Row of the global icon search.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct IconListItem {
    /// Stable identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Standalone SVG markup.
    pub svg: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// Uploading user.
    pub owner: UserSummary,
    /// Parent sprite.
    pub sprite: SpriteBrief,
}

impl From<IconListItemEntity> for IconListItem {
    fn from(entity: IconListItemEntity) -> Self {
        Self {
            id: entity.icon.id,
            name: entity.icon.name,
            svg: entity.icon.svg,
            created_at: format_system_time(entity.icon.created_at),
            owner: entity.owner.into(),
            sprite: entity.sprite.into(),
        }
    }
}

/// Response for the global icon listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct IconListResponse {
    /// Icons for the requested page.
    pub icons: Vec<IconListItem>,
    /// Pagination envelope.
    pub meta: PageMeta,
}

/// Payload carrying raw sprite markup to split into icons.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ExtractRequest {
    /// Raw SVG sprite markup.
    #[validate(custom(function = validate_svg_markup))]
    pub svg: String,
}

/// One icon recovered from an uploaded sprite file.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractedIcon {
    /// Name derived from the symbol id, or a positional fallback.
    pub name: String,
    /// Standalone SVG markup.
    pub svg: String,
}

impl From<SpriteIcon> for ExtractedIcon {
    fn from(icon: SpriteIcon) -> Self {
        Self {
            name: icon.name,
            svg: icon.svg,
        }
    }
}

/// Response for the symbol extraction endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    /// Icons recovered from the uploaded markup.
    pub icons: Vec<ExtractedIcon>,
}
