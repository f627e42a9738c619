use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is created once at startup and reused for every request; no other
/// per-process state exists.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mfapi_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
