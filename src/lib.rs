//! Library crate for games-back, exposing modules for binaries and tests.

/// Runtime configuration loading.
pub mod config;
/// Persistence backends for the game collection.
pub mod dao;
mod dto;
mod error;
/// HTTP routers and handlers.
pub mod routes;
/// Service layer between handlers and shared state.
pub mod services;
/// Shared application state and the game catalog.
pub mod state;
