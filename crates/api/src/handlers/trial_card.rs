//! Handlers for trial card creation, lookup, and soft deletion.
//!
//! Creation seeds the department progress ledger in the same transaction:
//! a trial card must never exist without its Methods pending row.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::audit::actions;
use foundry_core::error::CoreError;
use foundry_core::trial::validate_trial_id;
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::models::trial_card::CreateTrialCard;
use foundry_db::repositories::{AuditLogRepo, ProgressRepo, TrialCardRepo};

use crate::engine::progress as engine;
use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/trials
///
/// Create a trial card and seed its first ledger row atomically.
pub async fn create_trial(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTrialCard>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    // Business-rule check before the transaction begins.
    if TrialCardRepo::exists(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Trial '{}' already exists",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;

    let trial =
        TrialCardRepo::create(&mut tx, &input, foundry_core::departments::FIRST_DEPARTMENT)
            .await?;
    engine::create_department_progress(&mut tx, &trial.trial_id).await?;
    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(auth.user_id),
            username: auth.username.clone(),
            department_id: Some(auth.department_id),
            trial_id: Some(trial.trial_id.clone()),
            action: actions::TRIAL_CREATED.to_string(),
            remarks: Some(format!("part {}", trial.part_name)),
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        user_id = auth.user_id,
        trial_id = %trial.trial_id,
        part_name = %trial.part_name,
        "Trial card created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: trial })))
}

/// GET /api/v1/trials
///
/// List all live trial cards, newest first.
pub async fn list_trials(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let trials = TrialCardRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: trials }))
}

/// GET /api/v1/trials/{trial_id}
///
/// Fetch one trial card by its user-facing id.
pub async fn get_trial(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let trial = TrialCardRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "TrialCard",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: trial }))
}

/// GET /api/v1/trials/{trial_id}/history
///
/// Full progress ledger for a trial, oldest first.
pub async fn get_trial_history(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let history = ProgressRepo::history_for_trial(&state.pool, &trial_id).await?;
    Ok(Json(DataResponse { data: history }))
}

/// DELETE /api/v1/trials/{trial_id}
///
/// Soft-delete a trial card. Admin only.
pub async fn delete_trial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;

    let deleted = TrialCardRepo::soft_delete(&mut tx, &trial_id, &admin.username).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "TrialCard",
            key: trial_id,
        }));
    }

    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(admin.user_id),
            username: admin.username.clone(),
            department_id: Some(admin.department_id),
            trial_id: Some(trial_id.clone()),
            action: actions::TRIAL_DELETED.to_string(),
            remarks: None,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(user_id = admin.user_id, trial_id = %trial_id, "Trial card soft-deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Validate the required fields of a trial creation request.
fn validate_input(input: &CreateTrialCard) -> AppResult<()> {
    validate_trial_id(&input.trial_id)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    require_text(&input.part_name, "part_name")?;
    require_text(&input.pattern_code, "pattern_code")?;
    require_text(&input.trial_type, "trial_type")?;
    require_text(&input.material_grade, "material_grade")?;
    require_text(&input.initiated_by, "initiated_by")?;
    require_text(&input.reason_for_sampling, "reason_for_sampling")?;
    if input.plan_moulds <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "plan_moulds must be positive".into(),
        )));
    }
    Ok(())
}
