//! DTO definitions for category and tag aggregation.

use serde::Serialize;
use utoipa::ToSchema;

/// Distinct categories across the catalogue.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Category labels in ascending order.
    pub categories: Vec<String>,
}

/// Most used tags across the catalogue.
#[derive(Debug, Serialize, ToSchema)]
pub struct PopularTagsResponse {
    /// Tags ranked by how many sprites carry them.
    pub tags: Vec<String>,
}
