//! Authoritative in-memory game sequence kept in sync with its durable copy.
//!
//! Records are addressed by their current position, so removing a record
//! shifts every later record down by one.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{dao::game_store::GameStore, error::ServiceError, state::game::Game};

/// Message returned whenever a position is outside the sequence.
pub const NOT_FOUND_MESSAGE: &str = "No game found with specified ID";

/// Ordered game collection guarded by a single lock.
///
/// Mutations run on a copy of the sequence that only replaces the live one
/// once the store accepted it, so a failed write never leaves memory ahead
/// of disk.
pub struct GameCatalog {
    games: RwLock<Vec<Game>>,
    store: Arc<dyn GameStore>,
}

impl GameCatalog {
    /// Create a catalog holding `games`, persisting through `store`.
    pub fn new(store: Arc<dyn GameStore>, games: Vec<Game>) -> Self {
        Self {
            games: RwLock::new(games),
            store,
        }
    }

    /// Build a catalog from whatever `store` holds, starting empty when it cannot be read.
    pub async fn load(store: Arc<dyn GameStore>) -> Self {
        let games = match store.load().await {
            Ok(games) => {
                info!(count = games.len(), "loaded games");
                games
            }
            Err(err) => {
                warn!(error = %err, "failed to load games; starting with an empty catalog");
                Vec::new()
            }
        };
        Self::new(store, games)
    }

    /// Backend used to persist the collection.
    pub fn store(&self) -> &Arc<dyn GameStore> {
        &self.store
    }

    /// Number of records currently held.
    pub async fn count(&self) -> usize {
        self.games.read().await.len()
    }

    /// Snapshot of every record in position order.
    pub async fn all(&self) -> Vec<Game> {
        self.games.read().await.clone()
    }

    /// Record at `index`.
    pub async fn get(&self, index: usize) -> Result<Game, ServiceError> {
        let games = self.games.read().await;
        games.get(index).cloned().ok_or_else(not_found)
    }

    /// Fail with `NotFound` unless a record currently sits at `index`.
    pub async fn ensure_exists(&self, index: usize) -> Result<(), ServiceError> {
        if index < self.games.read().await.len() {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// Add `game` at the end and return the full sequence. The new record's position is the previous length.
    pub async fn append(&self, game: Game) -> Result<Vec<Game>, ServiceError> {
        self.mutate(|games| {
            games.push(game);
            Ok(games.clone())
        })
        .await
    }

    /// Overwrite the record at `index` wholesale.
    pub async fn replace(&self, index: usize, game: Game) -> Result<Game, ServiceError> {
        self.mutate(|games| {
            let slot = games.get_mut(index).ok_or_else(not_found)?;
            *slot = game;
            Ok(slot.clone())
        })
        .await
    }

    /// Apply `merge` to the record at `index` and return the result.
    pub async fn update<F>(&self, index: usize, merge: F) -> Result<Game, ServiceError>
    where
        F: FnOnce(&mut Game),
    {
        self.mutate(|games| {
            let slot = games.get_mut(index).ok_or_else(not_found)?;
            merge(slot);
            Ok(slot.clone())
        })
        .await
    }

    /// Remove the record at `index`, shifting later records down by one.
    pub async fn remove(&self, index: usize) -> Result<Game, ServiceError> {
        self.mutate(|games| {
            if index >= games.len() {
                return Err(not_found());
            }
            Ok(games.remove(index))
        })
        .await
    }

    async fn mutate<F, T>(&self, change: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Vec<Game>) -> Result<T, ServiceError>,
    {
        let mut games = self.games.write().await;
        let mut next = games.clone();
        let outcome = change(&mut next)?;

        self.store.save(next.clone()).await?;
        *games = next;
        Ok(outcome)
    }
}

fn not_found() -> ServiceError {
    ServiceError::NotFound(NOT_FOUND_MESSAGE.into())
}
