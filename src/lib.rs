//! Library crate for dnd-game-back, exposing modules for binaries and integration tests.

/// Environment-driven settings.
pub mod config;
/// Datastore access.
pub mod dao;
/// Request and response bodies.
pub mod dto;
/// Errors surfaced to HTTP callers.
pub mod error;
/// Chat-completion client.
pub mod llm;
/// HTTP route trees.
pub mod routes;
/// Business logic behind the routes.
pub mod services;
/// Shared application state.
pub mod state;
