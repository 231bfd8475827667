/// Game store trait and its backends.
pub mod game_store;
/// Storage error types shared by every backend.
pub mod storage;
