//! HTTP request handlers.
//!
//! The seven inspection controllers share one contract: validate, persist
//! the domain record, append an audit entry, and fire the role-dispatched
//! progress transition -- all inside a single transaction. The shared tail
//! of that contract lives in [`record_submission`] so the advancement
//! logic is computed in exactly one place.

pub mod admin;
pub mod audit;
pub mod department;
pub mod dimensional;
pub mod machine_shop;
pub mod master_card;
pub mod material_correction;
pub mod metallurgical;
pub mod mould_correction;
pub mod password_reset;
pub mod progress;
pub mod sand_properties;
pub mod trial_card;
pub mod visual;

use foundry_core::audit::actions;
use foundry_core::error::CoreError;
use foundry_core::transition::{dispatch, SubmissionKind, TransitionAction};
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::repositories::{AuditLogRepo, TrialCardRepo};
use sqlx::PgConnection;

use crate::engine::progress as engine;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Reject a submission whose required field is absent.
pub(crate) fn require_field<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "Missing required field: {field}"
        )))
    })
}

/// Reject a submission whose required text field is empty.
pub(crate) fn require_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Missing required field: {field}"
        ))));
    }
    Ok(())
}

/// Ensure a live trial card exists before any inspection write.
pub(crate) async fn ensure_trial_exists(state: &AppState, trial_id: &str) -> AppResult<()> {
    if !TrialCardRepo::exists(&state.pool, trial_id).await? {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: "TrialCard",
            key: trial_id.to_string(),
        }));
    }
    Ok(())
}

/// Shared tail of every inspection submission: dispatch the progress
/// transition for the actor's role, apply it, and append the audit entry.
/// Runs on the caller's open transaction.
pub(crate) async fn record_submission(
    conn: &mut PgConnection,
    auth: &AuthUser,
    trial_id: &str,
    record_label: &str,
    kind: SubmissionKind,
    is_edit: bool,
    is_draft: bool,
) -> AppResult<()> {
    let action = dispatch(kind, &auth.role, is_draft);
    let advancement = engine::apply_transition(&mut *conn, trial_id, auth, action).await?;

    let audit_action = match (kind, is_edit) {
        (SubmissionKind::Create, _) => actions::INSPECTION_SUBMITTED,
        (SubmissionKind::Update, true) => actions::INSPECTION_UPDATED,
        (SubmissionKind::Update, false) => match action {
            TransitionAction::UpdateRole => actions::ROLE_ADVANCED,
            TransitionAction::UpdateDepartment | TransitionAction::TriggerNextDepartment => {
                actions::DEPARTMENT_ADVANCED
            }
            // Admin touched nothing; there is no state change to record.
            TransitionAction::None => return Ok(()),
        },
    };

    let remarks = match &advancement {
        Some(adv) => format!("{record_label}; {}", adv.describe()),
        None => record_label.to_string(),
    };

    AuditLogRepo::insert(
        &mut *conn,
        &CreateAuditLog {
            user_id: Some(auth.user_id),
            username: auth.username.clone(),
            department_id: Some(auth.department_id),
            trial_id: Some(trial_id.to_string()),
            action: audit_action.to_string(),
            remarks: Some(remarks),
        },
    )
    .await?;

    Ok(())
}
