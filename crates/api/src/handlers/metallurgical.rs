//! Handlers for metallurgical inspections (Metallurgy).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::error::CoreError;
use foundry_core::transition::SubmissionKind;
use foundry_db::models::metallurgical::{
    CreateMetallurgicalInspection, UpdateMetallurgicalInspection,
};
use foundry_db::repositories::MetallurgicalInspectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trial_exists, record_submission, require_field, require_text};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const RECORD_LABEL: &str = "metallurgical inspection";

/// POST /api/v1/inspections/metallurgical
pub async fn create_metallurgical_inspection(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMetallurgicalInspection>,
) -> AppResult<impl IntoResponse> {
    let heat_code = require_field(input.heat_code.as_deref(), "heat_code")?;
    require_text(heat_code, "heat_code")?;
    require_field(input.pouring_temp_c, "pouring_temp_c")?;
    ensure_trial_exists(&state, &input.trial_id).await?;

    if MetallurgicalInspectionRepo::exists_for_trial(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Metallurgical inspection already exists for trial '{}'",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let record = MetallurgicalInspectionRepo::create(&mut tx, &input).await?;
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
        "Metallurgical inspection created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/inspections/metallurgical/{trial_id}
pub async fn update_metallurgical_inspection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<UpdateMetallurgicalInspection>,
) -> AppResult<impl IntoResponse> {
    let existing = MetallurgicalInspectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MetallurgicalInspection",
                key: trial_id.clone(),
            })
        })?;

    let mut tx = state.pool.begin().await?;
    let record = if input.is_edit {
        MetallurgicalInspectionRepo::update(&mut tx, &trial_id, &input)
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
        "Metallurgical inspection submitted"
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/inspections/metallurgical
pub async fn list_metallurgical_inspections(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = MetallurgicalInspectionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/inspections/metallurgical/{trial_id}
pub async fn get_metallurgical_inspection(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = MetallurgicalInspectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MetallurgicalInspection",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: record }))
}
