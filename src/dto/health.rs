use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
    /// Number of games currently held in memory.
    pub games: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(games: usize) -> Self {
        Self {
            status: "ok".to_string(),
            games,
        }
    }

    /// Create a health response indicating writes are likely to fail.
    pub fn degraded(games: usize) -> Self {
        Self {
            status: "degraded".to_string(),
            games,
        }
    }
}
