use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stats::StatsResponse, error::AppError, services::stats_service, state::SharedState,
};

/// Landing-page counters endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/stats", get(get_stats))
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses((status = 200, description = "Catalogue counters", body = StatsResponse))
)]
/// Aggregate catalogue counters.
pub async fn get_stats(State(state): State<SharedState>) -> Result<Json<StatsResponse>, AppError> {
    let payload = stats_service::catalogue_stats(&state).await?;
    Ok(Json(payload))
}
