use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::game::GamePatch,
    error::AppError,
    services::game_service,
    state::{SharedState, game::Game},
};

/// CRUD routes over the game collection.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game)
                .put(replace_game)
                .patch(patch_game)
                .delete(delete_game),
        )
}

/// List every game in position order.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses((status = 200, description = "All games", body = [Game]))
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<Game>> {
    Json(game_service::list_games(&state).await)
}

/// Fetch the game at the given position.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Current position of the game")),
    responses(
        (status = 200, description = "Game", body = Game),
        (status = 400, description = "Identifier is not a non-negative integer"),
        (status = 404, description = "No game at this position")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::get_game(&state, &id).await?))
}

/// Append a game; missing fields are stored as zero values.
///
/// The body is read as JSON whatever `Content-Type` the client sent.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = Game,
    responses(
        (status = 200, description = "Whole collection after the append", body = [Game]),
        (status = 400, description = "Body is not a game")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Vec<Game>>, AppError> {
    Ok(Json(game_service::create_game(&state, &body).await?))
}

/// Replace the game at the given position.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Current position of the game")),
    request_body = Game,
    responses(
        (status = 200, description = "Stored game", body = Game),
        (status = 400, description = "Bad identifier or body"),
        (status = 404, description = "No game at this position")
    )
)]
pub async fn replace_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::replace_game(&state, &id, &body).await?))
}

/// Merge the supplied fields into the game at the given position.
#[utoipa::path(
    patch,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Current position of the game")),
    request_body = GamePatch,
    responses(
        (status = 200, description = "Merged game", body = Game),
        (status = 400, description = "Bad identifier or body"),
        (status = 404, description = "No game at this position")
    )
)]
pub async fn patch_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::patch_game(&state, &id, &body).await?))
}

/// Remove the game at the given position; later games shift down by one.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "games",
    params(("id" = String, Path, description = "Current position of the game")),
    responses(
        (status = 200, description = "Game deleted"),
        (status = 400, description = "Identifier is not a non-negative integer"),
        (status = 404, description = "No game at this position")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, &id).await?;
    Ok(StatusCode::OK)
}
