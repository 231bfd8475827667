use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// CRUD routes over the game collection.
pub mod games;
/// Health check route.
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router().merge(games::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
