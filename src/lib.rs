//! Library crate for sprite-forge-back, exposing modules for binaries and integration tests.

/// Runtime configuration loading.
pub mod config;
/// Storage abstraction and backends.
pub mod dao;
/// Wire types for the REST API.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route handlers.
pub mod routes;
/// Application services.
pub mod services;
/// Shared application state.
pub mod state;
/// SVG sprite processing.
pub mod svg;

#[cfg(test)]
mod testkit;
