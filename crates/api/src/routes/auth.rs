//! Route definitions for the password-reset flow (public).
//!
//! ```text
//! POST   /forgot-password     request_otp
//! POST   /reset-password      confirm_reset
//! ```
//!
//! Session issuance (login/refresh) lives in the identity service and is
//! deliberately absent here.

use axum::routing::post;
use axum::Router;

use crate::handlers::password_reset;
use crate::state::AppState;

/// Auth routes, nested under `/auth`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/forgot-password", post(password_reset::request_otp))
        .route("/reset-password", post(password_reset::confirm_reset))
}
