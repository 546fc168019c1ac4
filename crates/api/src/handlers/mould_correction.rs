//! Handlers for mould correction records (Moulding).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::error::CoreError;
use foundry_core::transition::SubmissionKind;
use foundry_db::models::mould_correction::{CreateMouldCorrection, UpdateMouldCorrection};
use foundry_db::repositories::MouldCorrectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trial_exists, record_submission, require_field, require_text};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const RECORD_LABEL: &str = "mould correction";

/// POST /api/v1/inspections/mould-corrections
pub async fn create_mould_correction(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMouldCorrection>,
) -> AppResult<impl IntoResponse> {
    let disa_line = require_field(input.disa_line.as_deref(), "disa_line")?;
    require_text(disa_line, "disa_line")?;
    ensure_trial_exists(&state, &input.trial_id).await?;

    if MouldCorrectionRepo::exists_for_trial(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Mould correction record already exists for trial '{}'",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let record = MouldCorrectionRepo::create(&mut tx, &input).await?;
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
        "Mould correction record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/inspections/mould-corrections/{trial_id}
pub async fn update_mould_correction(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<UpdateMouldCorrection>,
) -> AppResult<impl IntoResponse> {
    let existing = MouldCorrectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MouldCorrection",
                key: trial_id.clone(),
            })
        })?;

    let mut tx = state.pool.begin().await?;
    let record = if input.is_edit {
        MouldCorrectionRepo::update(&mut tx, &trial_id, &input)
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
        "Mould correction record submitted"
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/inspections/mould-corrections
pub async fn list_mould_corrections(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = MouldCorrectionRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/inspections/mould-corrections/{trial_id}
pub async fn get_mould_correction(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = MouldCorrectionRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MouldCorrection",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: record }))
}
