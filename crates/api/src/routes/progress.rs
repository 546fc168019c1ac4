//! Route definitions for the progress views and the admin override.
//!
//! ```text
//! GET    /pending                 get_pending
//! GET    /completed               get_completed
//! POST   /{trial_id}/approve      approve (admin)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Progress routes, nested under `/progress`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(progress::get_pending))
        .route("/completed", get(progress::get_completed))
        .route("/{trial_id}/approve", post(progress::approve))
}
