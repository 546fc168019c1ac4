//! Route definition for the department lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// Department routes, nested under `/departments`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(department::list_departments))
}
