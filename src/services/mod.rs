/// Account registration, login, and session handling.
pub mod auth_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Sprite file generation for downloads.
pub mod download_service;
/// Favourite toggling.
pub mod favourite_service;
/// Health check service.
pub mod health_service;
/// Global icon search and symbol extraction.
pub mod icon_service;
/// Social-preview card rendering.
pub mod preview_service;
/// Sprite catalogue CRUD and listing.
pub mod sprite_service;
/// Landing-page counters.
pub mod stats_service;
/// Storage connection supervisor with reconnect backoff.
pub mod storage_supervisor;
/// Category and tag aggregation.
pub mod taxonomy_service;
