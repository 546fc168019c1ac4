//! Handler for the static department list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use foundry_db::repositories::DepartmentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/departments
///
/// All departments, ordered by id. Reference data for UI dropdowns.
pub async fn list_departments(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let departments = DepartmentRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}
