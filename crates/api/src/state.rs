use std::sync::Arc;

use wedsite_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Immutable after startup and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wedsite_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of "now" for countdowns, summaries and export file names.
    pub clock: Arc<dyn Clock>,
}
