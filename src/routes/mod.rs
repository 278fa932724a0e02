use axum::Router;

use crate::state::SharedState;

pub mod auth;
pub mod docs;
pub mod download;
pub mod favourites;
pub mod health;
pub mod icons;
pub mod preview;
pub mod sprites;
pub mod stats;
pub mod taxonomy;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(auth::router())
        .merge(sprites::router())
        .merge(icons::router())
        .merge(favourites::router())
        .merge(taxonomy::router())
        .merge(stats::router())
        .merge(download::router())
        .merge(preview::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
