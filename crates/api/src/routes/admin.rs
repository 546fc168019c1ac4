//! Route definitions for admin surfaces (user management, audit trail).
//!
//! ```text
//! POST   /users            create_user
//! GET    /audit-logs       query_audit_logs
//! ```
//!
//! Authorization is enforced by the `RequireAdmin` extractor on each
//! handler, not by the router.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{admin, audit};
use crate::state::AppState;

/// Admin routes, nested under `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(admin::create_user))
        .route("/audit-logs", get(audit::query_audit_logs))
}
