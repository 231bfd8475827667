/// Positional game collection mirrored to storage.
pub mod catalog;
/// Game record types.
pub mod game;

use std::sync::Arc;

use crate::{config::AppConfig, dao::game_store::GameStore};

use self::catalog::GameCatalog;

/// Handle to [`AppState`] cloned into every handler.
pub type SharedState = Arc<AppState>;

/// Central application state shared by every request handler.
pub struct AppState {
    catalog: GameCatalog,
}

impl AppState {
    /// Wrap an already populated catalog in an [`Arc`] so it can be cloned cheaply.
    pub fn new(catalog: GameCatalog) -> SharedState {
        Arc::new(Self { catalog })
    }

    /// Load the catalog from `store` and build the shared state around it.
    pub async fn load(store: Arc<dyn GameStore>) -> SharedState {
        Self::new(GameCatalog::load(store).await)
    }

    /// Build the shared state from the configured JSON file.
    pub async fn from_config(config: &AppConfig) -> SharedState {
        Self::load(Arc::new(config.game_store())).await
    }

    /// The game collection.
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }
}
