use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report the game count and whether the storage backend accepts writes.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let catalog = state.catalog();
    let games = catalog.count().await;

    match catalog.store().health_check().await {
        Ok(()) => HealthResponse::ok(games),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded(games)
        }
    }
}
