//! In-memory backends used by unit tests.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use futures::future::BoxFuture;

use crate::{
    dao::{
        game_store::GameStore,
        storage::{StorageError, StorageResult},
    },
    state::game::Game,
};

/// Keeps the last saved collection in memory and can be told to fail writes.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<Mutex<Vec<Game>>>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: bool,
}

impl MemoryGameStore {
    /// Store pre-filled with `games`.
    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: Arc::new(Mutex::new(games)),
            ..Self::default()
        }
    }

    /// Store whose `load` always fails.
    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Make every following `save` fail, or succeed again.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Collection as of the last successful save.
    pub fn saved(&self) -> Vec<Game> {
        self.games.lock().unwrap().clone()
    }
}

impl GameStore for MemoryGameStore {
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<Game>>> {
        let result = if self.fail_reads {
            Err(StorageError::Unavailable("read refused".into()))
        } else {
            Ok(self.saved())
        };
        Box::pin(async move { result })
    }

    fn save(&self, games: Vec<Game>) -> BoxFuture<'static, StorageResult<()>> {
        let result = if self.fail_writes.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable("write refused".into()))
        } else {
            *self.games.lock().unwrap() = games;
            Ok(())
        };
        Box::pin(async move { result })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let healthy = !self.fail_writes.load(Ordering::SeqCst);
        Box::pin(async move {
            if healthy {
                Ok(())
            } else {
                Err(StorageError::Unavailable("write refused".into()))
            }
        })
    }
}
