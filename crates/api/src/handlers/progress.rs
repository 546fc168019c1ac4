//! Handlers for the department progress views and the admin override.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use foundry_core::audit::actions;
use foundry_core::error::CoreError;
use foundry_core::types::DbId;
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::repositories::{AuditLogRepo, ProgressRepo, UserRepo};

use crate::engine::progress as engine;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the pending progress view.
#[derive(Debug, Deserialize)]
pub struct PendingParams {
    /// Resolve the department from this user instead of the caller.
    pub username: Option<String>,
    /// Explicit department filter; wins over any username.
    pub department_id: Option<DbId>,
}

/// GET /api/v1/progress/pending
///
/// Pending ledger rows joined with trial metadata: the work queue. Scoped
/// to the explicit `department_id` when given, else to the department of
/// `username` (defaulting to the caller), oldest first.
pub async fn get_pending(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PendingParams>,
) -> AppResult<impl IntoResponse> {
    let department_id = match params.department_id {
        Some(id) => id,
        None => match &params.username {
            Some(username) => {
                let user = UserRepo::find_by_username(&state.pool, username)
                    .await?
                    .ok_or_else(|| {
                        AppError::Core(CoreError::NotFoundByKey {
                            entity: "User",
                            key: username.clone(),
                        })
                    })?;
                user.department_id
            }
            None => auth.department_id,
        },
    };

    let items = ProgressRepo::pending_for_department(&state.pool, department_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/progress/completed
///
/// Approved ledger rows for the caller's department, newest first.
pub async fn get_completed(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items =
        ProgressRepo::completed_for_department(&state.pool, auth.department_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// Request body for the admin override.
#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    pub remarks: Option<String>,
}

/// POST /api/v1/progress/{trial_id}/approve
///
/// Administrative override: force-approve the current department and move
/// the trial forward, bypassing the normal role checks. Admin only.
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;

    let advancement =
        engine::approve_progress(&mut tx, &trial_id, input.remarks.as_deref()).await?;
    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(admin.user_id),
            username: admin.username.clone(),
            department_id: Some(admin.department_id),
            trial_id: Some(trial_id.clone()),
            action: actions::ADMIN_OVERRIDE.to_string(),
            remarks: Some(advancement.describe()),
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        user_id = admin.user_id,
        trial_id = %trial_id,
        outcome = %advancement.describe(),
        "Admin override applied"
    );

    Ok(Json(DataResponse {
        data: serde_json::json!({
            "trial_id": trial_id,
            "outcome": advancement.describe(),
        }),
    }))
}
