use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI JSON.
pub mod docs;
/// `/players` listing and creation.
pub mod players;
/// `/` liveness banner.
pub mod root;
/// `/story` generation.
pub mod story;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = root::router()
        .merge(players::router())
        .merge(story::router());

    api_router.merge(docs::router()).with_state(state)
}
