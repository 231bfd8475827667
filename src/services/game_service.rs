use serde::de::DeserializeOwned;
use tracing::info;

use crate::{
    dto::game::GamePatch,
    error::ServiceError,
    state::{SharedState, game::Game},
};

/// Message returned when the path identifier is not a non-negative integer.
pub const INVALID_ID_MESSAGE: &str = "ID could not be converted to integer";

/// List every game in position order.
pub async fn list_games(state: &SharedState) -> Vec<Game> {
    state.catalog().all().await
}

/// Fetch the game currently at position `id`.
pub async fn get_game(state: &SharedState, id: &str) -> Result<Game, ServiceError> {
    let index = parse_index(id)?;
    state.catalog().get(index).await
}

/// Decode `body` as a game and append it, returning the whole collection.
pub async fn create_game(
    state: &SharedState,
    body: &[u8],
) -> Result<Vec<Game>, ServiceError> {
    let game: Game = decode_body(body)?;
    let games = state.catalog().append(game).await?;
    info!(id = games.len() - 1, "game created");
    Ok(games)
}

/// Replace the game at position `id` with the game decoded from `body`.
///
/// The identifier is checked before the body, so an unknown position is
/// reported as such whatever the payload.
pub async fn replace_game(
    state: &SharedState,
    id: &str,
    body: &[u8],
) -> Result<Game, ServiceError> {
    let index = parse_index(id)?;
    state.catalog().ensure_exists(index).await?;
    let game: Game = decode_body(body)?;
    let game = state.catalog().replace(index, game).await?;
    info!(id = index, "game replaced");
    Ok(game)
}

/// Merge the fields present in `body` into the game at position `id`.
pub async fn patch_game(
    state: &SharedState,
    id: &str,
    body: &[u8],
) -> Result<Game, ServiceError> {
    let index = parse_index(id)?;
    state.catalog().ensure_exists(index).await?;
    let patch: GamePatch = decode_body(body)?;
    let game = state
        .catalog()
        .update(index, |game| patch.apply_to(game))
        .await?;
    info!(id = index, "game patched");
    Ok(game)
}

/// Remove the game at position `id`; later games move down one position.
pub async fn delete_game(state: &SharedState, id: &str) -> Result<(), ServiceError> {
    let index = parse_index(id)?;
    let removed = state.catalog().remove(index).await?;
    info!(id = index, title = %removed.title, "game deleted");
    Ok(())
}

/// Resolve a path identifier into a position. Negative values are rejected here
/// rather than reaching the sequence.
fn parse_index(id: &str) -> Result<usize, ServiceError> {
    id.parse::<usize>()
        .map_err(|_| ServiceError::InvalidInput(INVALID_ID_MESSAGE.into()))
}

/// Decode a JSON request body whatever content type the client declared.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(body)
        .map_err(|err| ServiceError::InvalidInput(format!("invalid game body: {err}")))
}
