//! Handlers for dimensional inspections (Quality).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::error::CoreError;
use foundry_core::transition::SubmissionKind;
use foundry_db::models::dimensional::{
    CreateDimensionalInspection, UpdateDimensionalInspection,
};
use foundry_db::repositories::DimensionalInspectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trial_exists, record_submission, require_field};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const RECORD_LABEL: &str = "dimensional inspection";

/// POST /api/v1/inspections/dimensional
pub async fn create_dimensional_inspection(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDimensionalInspection>,
) -> AppResult<impl IntoResponse> {
    require_field(input.casting_weight, "casting_weight")?;
    ensure_trial_exists(&state, &input.trial_id).await?;

    if DimensionalInspectionRepo::exists_for_trial(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Dimensional inspection already exists for trial '{}'",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let record = DimensionalInspectionRepo::create(&mut tx, &input).await?;
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
        "Dimensional inspection created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/inspections/dimensional/{trial_id}
pub async fn update_dimensional_inspection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<UpdateDimensionalInspection>,
) -> AppResult<impl IntoResponse> {
    let existing = DimensionalInspectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "DimensionalInspection",
                key: trial_id.clone(),
            })
        })?;

    let mut tx = state.pool.begin().await?;
    let record = if input.is_edit {
        DimensionalInspectionRepo::update(&mut tx, &trial_id, &input)
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
        "Dimensional inspection submitted"
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/inspections/dimensional
pub async fn list_dimensional_inspections(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = DimensionalInspectionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/inspections/dimensional/{trial_id}
pub async fn get_dimensional_inspection(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = DimensionalInspectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "DimensionalInspection",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: record }))
}
