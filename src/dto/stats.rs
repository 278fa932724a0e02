//! DTO definitions for the landing-page counters.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dao::models::StatsEntity;

/// Aggregate catalogue counters.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
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

impl From<StatsEntity> for StatsResponse {
    fn from(entity: StatsEntity) -> Self {
        Self {
            total_sprites: entity.total_sprites,
            total_icons: entity.total_icons,
            total_users: entity.total_users,
            total_downloads: entity.total_downloads,
            total_favourites: entity.total_favourites,
        }
    }
}
