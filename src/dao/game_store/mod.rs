pub mod json_file;
#[cfg(test)]
pub mod memory;

use futures::future::BoxFuture;

use crate::{dao::storage::StorageResult, state::game::Game};

pub use self::json_file::JsonFileGameStore;

/// Abstraction over the durable copy of the game collection.
///
/// Backends always exchange the whole collection: `save` replaces whatever was
/// stored before.
pub trait GameStore: Send + Sync {
    /// Read the persisted collection. A store that was never written yields an empty list.
    fn load(&self) -> BoxFuture<'static, StorageResult<Vec<Game>>>;
    /// Replace the persisted collection with `games`.
    fn save(&self, games: Vec<Game>) -> BoxFuture<'static, StorageResult<()>>;
    /// Check that the backend is reachable for the next write.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
