//! DTO definitions for sprite file generation.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::sprite::IconInput;

/// Payload accepted by the download endpoint.
///
/// Either `id` points at a persisted sprite, or `name` + `icons` describe an
/// ad-hoc set assembled client-side; `id` wins when both are present.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct DownloadRequest {
    /// Persisted sprite to download.
    pub id: Option<Uuid>,
    /// Name for an ad-hoc sprite file.
    #[validate(length(min = 1, max = 80))]
    pub name: Option<String>,
    /// Icons for an ad-hoc sprite file.
    #[validate(nested)]
    pub icons: Option<Vec<IconInput>>,
}
