use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notifications::mailer::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: foundry_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// SMTP mailer; `None` when email delivery is not configured.
    pub mailer: Option<Arc<Mailer>>,
}
