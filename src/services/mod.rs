/// OpenAPI documentation generation.
pub mod documentation;
/// Identifier resolution and game collection operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
