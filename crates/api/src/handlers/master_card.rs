//! Handlers for the master list (pattern-code specifications).
//!
//! Write access is admin only; the workflow engine never touches these
//! rows. The specifications view derives display-ready values from the
//! loosely-typed spec text via `foundry_core::specparse` -- read-only and
//! best-effort, never written back.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use foundry_core::audit::actions;
use foundry_core::error::CoreError;
use foundry_core::specparse::{
    parse_chemical_composition, parse_hardness, parse_microstructure, parse_tensile,
    ChemicalComposition, HardnessSpec, MicrostructureSpec, TensileSpec,
};
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::models::master_card::{CreateMasterCard, MasterCard, UpdateMasterCard};
use foundry_db::repositories::{AuditLogRepo, MasterCardRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Display-ready specification view for a pattern code.
#[derive(Debug, Serialize)]
pub struct MasterCardSpecifications {
    pub pattern_code: String,
    pub part_name: String,
    pub material_grade: String,
    pub chemical_composition: ChemicalComposition,
    pub tensile: TensileSpec,
    pub microstructure: MicrostructureSpec,
    pub hardness: HardnessSpec,
}

/// POST /api/v1/master-cards
///
/// Create a master card. Admin only.
pub async fn create_master_card(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMasterCard>,
) -> AppResult<impl IntoResponse> {
    require_text(&input.pattern_code, "pattern_code")?;
    require_text(&input.part_name, "part_name")?;
    require_text(&input.material_grade, "material_grade")?;

    if MasterCardRepo::find_by_pattern_code(&state.pool, &input.pattern_code)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Master card for pattern '{}' already exists",
            input.pattern_code
        ))));
    }

    let mut tx = state.pool.begin().await?;
    let card = MasterCardRepo::create(&mut tx, &input).await?;
    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(admin.user_id),
            username: admin.username.clone(),
            department_id: Some(admin.department_id),
            trial_id: None,
            action: actions::MASTER_CARD_CREATED.to_string(),
            remarks: Some(format!("pattern {}", card.pattern_code)),
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        user_id = admin.user_id,
        pattern_code = %card.pattern_code,
        "Master card created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// PUT /api/v1/master-cards/{pattern_code}
///
/// Partially update a master card. Admin only.
pub async fn update_master_card(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(pattern_code): Path<String>,
    Json(input): Json<UpdateMasterCard>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    let card = MasterCardRepo::update(&mut tx, &pattern_code, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MasterCard",
                key: pattern_code.clone(),
            })
        })?;
    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(admin.user_id),
            username: admin.username.clone(),
            department_id: Some(admin.department_id),
            trial_id: None,
            action: actions::MASTER_CARD_UPDATED.to_string(),
            remarks: Some(format!("pattern {pattern_code}")),
        },
    )
    .await?;
    tx.commit().await?;

    Ok(Json(DataResponse { data: card }))
}

/// GET /api/v1/master-cards
pub async fn list_master_cards(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cards = MasterCardRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: cards }))
}

/// GET /api/v1/master-cards/{pattern_code}
pub async fn get_master_card(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(pattern_code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let card = find_card(&state, &pattern_code).await?;
    Ok(Json(DataResponse { data: card }))
}

/// GET /api/v1/master-cards/{pattern_code}/specifications
///
/// Display-ready parsed specification values for the trial report pages.
pub async fn get_specifications(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(pattern_code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let card = find_card(&state, &pattern_code).await?;

    let specs = MasterCardSpecifications {
        pattern_code: card.pattern_code,
        part_name: card.part_name,
        material_grade: card.material_grade,
        chemical_composition: parse_chemical_composition(card.chemical_composition.as_deref()),
        tensile: parse_tensile(card.tensile_requirement.as_deref()),
        microstructure: parse_microstructure(card.microstructure.as_deref()),
        hardness: parse_hardness(card.hardness.as_deref()),
    };

    Ok(Json(DataResponse { data: specs }))
}

async fn find_card(state: &AppState, pattern_code: &str) -> AppResult<MasterCard> {
    MasterCardRepo::find_by_pattern_code(&state.pool, pattern_code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "MasterCard",
                key: pattern_code.to_string(),
            })
        })
}
