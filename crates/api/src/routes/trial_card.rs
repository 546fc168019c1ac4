//! Route definitions for trial cards.
//!
//! ```text
//! POST   /                       create_trial
//! GET    /                       list_trials
//! GET    /{trial_id}             get_trial
//! GET    /{trial_id}/history     get_trial_history
//! DELETE /{trial_id}             delete_trial (admin)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::trial_card;
use crate::state::AppState;

/// Trial card routes, nested under `/trials`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(trial_card::list_trials).post(trial_card::create_trial),
        )
        .route(
            "/{trial_id}",
            get(trial_card::get_trial).delete(trial_card::delete_trial),
        )
        .route("/{trial_id}/history", get(trial_card::get_trial_history))
}
