//! Department progress transition service.
//!
//! All workflow state lives in two places: the `department_progress`
//! ledger (one row per department visit, exactly one pending row per open
//! trial) and `trial_cards.current_department_id` (the owning department).
//! Every operation here mutates both consistently and runs on the caller's
//! open transaction -- the caller bundles the domain write, the audit
//! entry, and the transition into one `pool.begin()` / `commit()` pair, so
//! a failure anywhere rolls back everything. No retries, no compensation:
//! a failed transaction surfaces as an error response and the caller
//! resubmits.

use foundry_core::departments::{department_name, next_department, FIRST_DEPARTMENT};
use foundry_core::error::CoreError;
use foundry_core::transition::TransitionAction;
use foundry_core::trial::{STAGE_REVIEW, STATUS_CLOSED, STATUS_IN_PROGRESS};
use foundry_core::types::DbId;
use foundry_db::models::progress::DepartmentProgress;
use foundry_db::repositories::{ProgressRepo, TrialCardRepo};
use sqlx::PgConnection;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Outcome of a department advancement, for audit remarks and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advancement {
    /// Ownership moved from one department to the next.
    Advanced { from: DbId, to: DbId },
    /// The terminal department signed off; the trial is closed.
    Closed { last: DbId },
}

impl Advancement {
    /// Human-readable remark for the audit trail.
    pub fn describe(&self) -> String {
        match self {
            Advancement::Advanced { from, to } => format!(
                "{} -> {}",
                department_name(*from),
                department_name(*to)
            ),
            Advancement::Closed { last } => {
                format!("{} signed off; trial closed", department_name(*last))
            }
        }
    }
}

/// Seed the first ledger row when a trial card is created.
///
/// Must run in the same transaction as the trial-card insert: a trial must
/// never exist without a ledger row, and vice versa.
pub async fn create_department_progress(
    conn: &mut PgConnection,
    trial_id: &str,
) -> AppResult<DepartmentProgress> {
    let row = ProgressRepo::insert_pending(conn, trial_id, FIRST_DEPARTMENT).await?;
    tracing::info!(
        trial_id,
        department_id = FIRST_DEPARTMENT,
        "Seeded department progress ledger"
    );
    Ok(row)
}

/// Advance the intra-department sub-state: the data-entry user hands the
/// trial off to the department HOD for review. The department pointer is
/// untouched.
pub async fn update_role(conn: &mut PgConnection, trial_id: &str) -> AppResult<()> {
    let updated = ProgressRepo::advance_stage(conn, trial_id, STAGE_REVIEW).await?;
    if !updated {
        return Err(no_pending(trial_id));
    }
    tracing::info!(trial_id, stage = STAGE_REVIEW, "Advanced ledger stage");
    Ok(())
}

/// Approve the current department's work and move the trial forward.
///
/// Marks the pending ledger row approved, inserts a pending row for the
/// next department in the pipeline and repoints the trial card -- or, at
/// the terminal department, closes the trial and appends no further row.
pub async fn update_department(
    conn: &mut PgConnection,
    trial_id: &str,
    remarks: Option<&str>,
) -> AppResult<Advancement> {
    let pending = ProgressRepo::find_pending_for_trial(conn, trial_id)
        .await?
        .ok_or_else(|| no_pending(trial_id))?;

    ProgressRepo::mark_approved(conn, pending.id, remarks).await?;

    match next_department(pending.department_id) {
        Some(next) => {
            ProgressRepo::insert_pending(conn, trial_id, next).await?;
            TrialCardRepo::set_current_department(conn, trial_id, next).await?;
            TrialCardRepo::set_status(conn, trial_id, STATUS_IN_PROGRESS).await?;
            tracing::info!(
                trial_id,
                from = pending.department_id,
                to = next,
                "Trial advanced to next department"
            );
            Ok(Advancement::Advanced {
                from: pending.department_id,
                to: next,
            })
        }
        None => {
            TrialCardRepo::set_status(conn, trial_id, STATUS_CLOSED).await?;
            tracing::info!(
                trial_id,
                department_id = pending.department_id,
                "Terminal department approved; trial closed"
            );
            Ok(Advancement::Closed {
                last: pending.department_id,
            })
        }
    }
}

/// Draft/save-and-forward variant: a department submits its record and
/// forwards the trial in one action, without a separate review step. Same
/// end state as [`update_department`].
pub async fn trigger_next_department(
    conn: &mut PgConnection,
    trial_id: &str,
) -> AppResult<Advancement> {
    update_department(conn, trial_id, None).await
}

/// Administrative override: force-approve the current department's ledger
/// row regardless of the normal role checks. Role enforcement (admin only)
/// happens at the handler; the mechanics match [`update_department`].
pub async fn approve_progress(
    conn: &mut PgConnection,
    trial_id: &str,
    remarks: Option<&str>,
) -> AppResult<Advancement> {
    update_department(conn, trial_id, remarks).await
}

/// Apply the dispatch decision an inspection controller computed from the
/// actor's role and the draft flag. Returns the advancement when the
/// department moved, `None` for stage-only or admin submissions.
pub async fn apply_transition(
    conn: &mut PgConnection,
    trial_id: &str,
    actor: &AuthUser,
    action: TransitionAction,
) -> AppResult<Option<Advancement>> {
    match action {
        TransitionAction::None => Ok(None),
        TransitionAction::UpdateRole => {
            update_role(conn, trial_id).await?;
            tracing::info!(
                trial_id,
                username = %actor.username,
                "Sub-step recorded; department unchanged"
            );
            Ok(None)
        }
        TransitionAction::UpdateDepartment => {
            let adv = update_department(conn, trial_id, None).await?;
            Ok(Some(adv))
        }
        TransitionAction::TriggerNextDepartment => {
            let adv = trigger_next_department(conn, trial_id).await?;
            Ok(Some(adv))
        }
    }
}

/// A transition was requested for a trial with no pending ledger row:
/// the trial is closed, deleted, or its ledger is corrupted.
fn no_pending(trial_id: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Trial '{trial_id}' has no pending department; it may already be closed"
    )))
}
