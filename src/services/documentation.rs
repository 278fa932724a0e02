use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the sprite catalogue API.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::me,
        crate::routes::sprites::list_sprites,
        crate::routes::sprites::create_sprite,
        crate::routes::sprites::get_sprite,
        crate::routes::sprites::list_sprite_icons,
        crate::routes::sprites::update_sprite,
        crate::routes::sprites::delete_sprite,
        crate::routes::icons::list_icons,
        crate::routes::icons::extract_icons,
        crate::routes::favourites::add_favourite,
        crate::routes::favourites::remove_favourite,
        crate::routes::taxonomy::list_categories,
        crate::routes::taxonomy::popular_tags,
        crate::routes::stats::get_stats,
        crate::routes::download::download_sprite,
        crate::routes::preview::sprite_preview,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::auth::RegisterRequest,
            crate::dto::auth::LoginRequest,
            crate::dto::auth::UserResponse,
            crate::dto::common::PageMeta,
            crate::dto::common::SortOrderParam,
            crate::dto::common::UserSummary,
            crate::dto::sprite::CreateSpriteRequest,
            crate::dto::sprite::UpdateSpriteRequest,
            crate::dto::sprite::IconInput,
            crate::dto::sprite::SpriteSortParam,
            crate::dto::sprite::SpriteSummary,
            crate::dto::sprite::IconSummary,
            crate::dto::sprite::SpriteListResponse,
            crate::dto::sprite::SpriteDetailResponse,
            crate::dto::sprite::SpriteIconsResponse,
            crate::dto::icon::IconSortParam,
            crate::dto::icon::SpriteBrief,
            crate::dto::icon::IconListItem,
            crate::dto::icon::IconListResponse,
            crate::dto::icon::ExtractRequest,
            crate::dto::icon::ExtractedIcon,
            crate::dto::icon::ExtractResponse,
            crate::dto::download::DownloadRequest,
            crate::dto::stats::StatsResponse,
            crate::dto::taxonomy::CategoriesResponse,
            crate::dto::taxonomy::PopularTagsResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Account and session endpoints"),
        (name = "sprites", description = "Sprite catalogue operations"),
        (name = "icons", description = "Global icon search and symbol extraction"),
        (name = "favourites", description = "Favourite toggling"),
        (name = "taxonomy", description = "Category and tag aggregation"),
        (name = "stats", description = "Catalogue counters"),
        (name = "download", description = "Sprite file generation"),
    )
)]
pub struct ApiDoc;
