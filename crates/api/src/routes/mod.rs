//! Route tree assembly.

pub mod admin;
pub mod auth;
pub mod department;
pub mod health;
pub mod inspections;
pub mod master_card;
pub mod progress;
pub mod trial_card;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/forgot-password                    request reset code (public)
/// /auth/reset-password                     confirm reset (public)
///
/// /trials                                  create, list
/// /trials/{trial_id}                       get, delete (admin)
/// /trials/{trial_id}/history               progress ledger history
///
/// /progress/pending                        department work queue
/// /progress/completed                      finished work, newest first
/// /progress/{trial_id}/approve             admin override (POST)
///
/// /inspections/sand-properties             Sand Plant form
/// /inspections/mould-corrections           Moulding form
/// /inspections/metallurgical               Metallurgy form
/// /inspections/material-corrections        Metallurgy correction form
/// /inspections/visual                      Quality visual/NDT form
/// /inspections/dimensional                 Quality dimensional form
/// /inspections/machine-shop                Machine Shop form
///
/// /master-cards                            list, create (admin)
/// /master-cards/{pattern_code}             get, update (admin)
/// /master-cards/{pattern_code}/specifications  parsed display values
///
/// /departments                             static lookup
///
/// /admin/users                             create user (admin)
/// /admin/audit-logs                        audit trail query (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/trials", trial_card::router())
        .nest("/progress", progress::router())
        .nest("/inspections", inspections::router())
        .nest("/master-cards", master_card::router())
        .nest("/departments", department::router())
        .nest("/admin", admin::router())
}
