//! Handlers for machine shop records (Machine Shop, terminal department).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::error::CoreError;
use foundry_core::transition::SubmissionKind;
use foundry_db::models::machine_shop::{CreateMachineShopRecord, UpdateMachineShopRecord};
use foundry_db::repositories::MachineShopRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_trial_exists, record_submission};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const RECORD_LABEL: &str = "machine shop record";

/// POST /api/v1/inspections/machine-shop
pub async fn create_machine_shop_record(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMachineShopRecord>,
) -> AppResult<impl IntoResponse> {
    ensure_trial_exists(&state, &input.trial_id).await?;

    if MachineShopRepo::exists_for_trial(&state.pool, &input.trial_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Machine shop record already exists for trial '{}'",
            input.trial_id
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let record = MachineShopRepo::create(&mut tx, &input).await?;
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
        "Machine shop record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/inspections/machine-shop/{trial_id}
pub async fn update_machine_shop_record(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
    Json(input): Json<UpdateMachineShopRecord>,
) -> AppResult<impl IntoResponse> {
    let existing = MachineShopRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MachineShopRecord",
                key: trial_id.clone(),
            })
        })?;

    let mut tx = state.pool.begin().await?;
    let record = if input.is_edit {
        MachineShopRepo::update(&mut tx, &trial_id, &input)
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
        "Machine shop record submitted"
    );

    Ok(Json(DataResponse { data: record }))
}

/// GET /api/v1/inspections/machine-shop
pub async fn list_machine_shop_records(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let records = MachineShopRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/inspections/machine-shop/{trial_id}
pub async fn get_machine_shop_record(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(trial_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let record = MachineShopRepo::find_by_trial_id(&state.pool, &trial_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MachineShopRecord",
                key: trial_id.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: record }))
}
