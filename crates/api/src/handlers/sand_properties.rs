//! Handlers for sand properties records (Sand Plant).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::error::CoreError;
use foundry_core::transition::SubmissionKind;
use foundry_db::models::sand_properties::{CreateSandProperties, UpdateSandProperties};
use foundry_db::repositories::SandPropertiesRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trial_exists, record_submission, require_field};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const RECORD_LABEL: &str = "sand properties";

/// POST /api/v1/inspections/sand-properties
///
/// Create the sand properties record for a trial and fire the
/// role-dispatched progress transition.
pub async fn create_sand_properties(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateSandProperties>,
) -> AppResult<impl IntoResponse> {
    require_field(input.moisture_percent, "moisture_percent")?;
    require_field(input.green_compression_strength, "green_compression_strength")?;
    ensure_trial_exists(&state, &input.trial_id).await?;

    if SandPropertiesRepo::exists_for_trial(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Sand properties record already exists for trial '{}'",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let record = SandPropertiesRepo::create(&mut tx, &input).await?;
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
        "Sand properties record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/inspections/sand-properties/{trial_id}
///
/// Update the record (COALESCE partial semantics when `is_edit`) and fire
/// the role-dispatched progress transition.
pub async fn update_sand_properties(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<UpdateSandProperties>,
) -> AppResult<impl IntoResponse> {
    let existing = SandPropertiesRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "SandProperties",
                key: trial_id.clone(),
            })
        })?;

    let mut tx = state.pool.begin().await?;
    let record = if input.is_edit {
        SandPropertiesRepo::update(&mut tx, &trial_id, &input)
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
        "Sand properties record submitted"
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/inspections/sand-properties
pub async fn list_sand_properties(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = SandPropertiesRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/inspections/sand-properties/{trial_id}
pub async fn get_sand_properties(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = SandPropertiesRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "SandProperties",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: record }))
}
