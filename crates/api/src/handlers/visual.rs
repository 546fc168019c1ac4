//! Handlers for visual / NDT inspections (Quality).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::error::CoreError;
use foundry_core::transition::SubmissionKind;
use foundry_db::models::visual::{CreateVisualInspection, UpdateVisualInspection};
use foundry_db::repositories::VisualInspectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trial_exists, record_submission, require_field, require_text};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const RECORD_LABEL: &str = "visual inspection";

/// POST /api/v1/inspections/visual
pub async fn create_visual_inspection(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateVisualInspection>,
) -> AppResult<impl IntoResponse> {
    let surface = require_field(input.surface_condition.as_deref(), "surface_condition")?;
    require_text(surface, "surface_condition")?;
    ensure_trial_exists(&state, &input.trial_id).await?;

    if VisualInspectionRepo::exists_for_trial(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Visual inspection already exists for trial '{}'",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let record = VisualInspectionRepo::create(&mut tx, &input).await?;
    record_submission(
        &mut tx,
        &auth,
        &input.trial_id,
        RECORD_LABEL,
        SubmissionKind::Create,
        false,
        input.is_draft,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        user_id = auth.user_id,
        trial_id = %input.trial_id,
        is_draft = input.is_draft,
        "Visual inspection created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/inspections/visual/{trial_id}
pub async fn update_visual_inspection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<UpdateVisualInspection>,
) -> AppResult<impl IntoResponse> {
    let existing = VisualInspectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "VisualInspection",
                key: trial_id.clone(),
            })
        })?;

    let mut tx = state.pool.begin().await?;
    let record = if input.is_edit {
        VisualInspectionRepo::update(&mut tx, &trial_id, &input)
            .await?
            .unwrap_or(existing)
    } else {
        existing
    };
    record_submission(
        &mut tx,
        &auth,
        &trial_id,
        RECORD_LABEL,
        SubmissionKind::Update,
        input.is_edit,
        input.is_draft,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        user_id = auth.user_id,
        trial_id = %trial_id,
        is_edit = input.is_edit,
        is_draft = input.is_draft,
        "Visual inspection submitted"
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/inspections/visual
pub async fn list_visual_inspections(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = VisualInspectionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/inspections/visual/{trial_id}
pub async fn get_visual_inspection(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = VisualInspectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "VisualInspection",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: record }))
}
