use crate::{dto::stats::StatsResponse, error::ServiceError, state::SharedState};

/// Aggregate catalogue counters for the landing page.
pub async fn catalogue_stats(state: &SharedState) -> Result<StatsResponse, ServiceError> {
    let store = state.require_sprite_store().await?;
    let stats = store.stats().await?;
    Ok(stats.into())
}
