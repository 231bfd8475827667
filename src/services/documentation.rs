use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the games API.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::games::create_game,
        crate::routes::games::replace_game,
        crate::routes::games::patch_game,
        crate::routes::games::delete_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::game::GamePatch,
            crate::dto::game::DirectorPatch,
            crate::dto::game::DeveloperPatch,
            crate::dto::game::PublisherPatch,
            crate::state::game::Game,
            crate::state::game::Director,
            crate::state::game::Developer,
            crate::state::game::Publisher,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "games", description = "Game collection addressed by position"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_patch_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;

        for name in [
            "GamePatch",
            "DirectorPatch",
            "DeveloperPatch",
            "PublisherPatch",
            "Game",
        ] {
            assert!(schemas.contains_key(name), "missing schema `{name}`");
        }
    }

    #[test]
    fn document_serializes_to_json() {
        let json = ApiDoc::openapi().to_pretty_json().unwrap();
        assert!(json.contains("\"/games/{id}\""));
    }
}
