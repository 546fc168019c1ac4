//! Repository for the `department_progress` ledger.
//!
//! The ledger is append-and-flip: a row is inserted pending when a
//! department takes ownership, flipped to approved when it signs off, and
//! never deleted. The partial unique index `uq_department_progress_pending`
//! enforces at most one pending row per trial.

use foundry_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::progress::{CompletedProgressItem, DepartmentProgress, PendingProgressItem};

/// Column list for department_progress queries.
const COLUMNS: &str = "\
    id, trial_id, department_id, approval_status, stage, remarks, \
    completed_at, created_at, updated_at";

/// Provides ledger operations for department progress.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Append a pending ledger row for a department taking ownership.
    pub async fn insert_pending(
        conn: &mut PgConnection,
        trial_id: &str,
        department_id: DbId,
    ) -> Result<DepartmentProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO department_progress (trial_id, department_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DepartmentProgress>(&query)
            .bind(trial_id)
            .bind(department_id)
            .fetch_one(conn)
            .await
    }

    /// Find the single pending row for a trial, if any.
    pub async fn find_pending_for_trial(
        conn: &mut PgConnection,
        trial_id: &str,
    ) -> Result<Option<DepartmentProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM department_progress
             WHERE trial_id = $1 AND approval_status = 'pending'"
        );
        sqlx::query_as::<_, DepartmentProgress>(&query)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Flip a ledger row to approved and stamp its completion time.
    pub async fn mark_approved(
        conn: &mut PgConnection,
        id: DbId,
        remarks: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE department_progress
             SET approval_status = 'approved',
                 completed_at = now(),
                 remarks = COALESCE($1, remarks),
                 updated_at = now()
             WHERE id = $2",
        )
        .bind(remarks)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Advance the intra-department stage of the pending row (entry → review).
    ///
    /// Returns `false` when the trial has no pending row.
    pub async fn advance_stage(
        conn: &mut PgConnection,
        trial_id: &str,
        stage: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE department_progress
             SET stage = $1, updated_at = now()
             WHERE trial_id = $2 AND approval_status = 'pending'",
        )
        .bind(stage)
        .bind(trial_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count pending rows for a trial (0 or 1 when the invariant holds).
    pub async fn count_pending_for_trial(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM department_progress
             WHERE trial_id = $1 AND approval_status = 'pending'",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }

    /// Full ledger history for a trial, oldest first.
    pub async fn history_for_trial(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Vec<DepartmentProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM department_progress
             WHERE trial_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, DepartmentProgress>(&query)
            .bind(trial_id)
            .fetch_all(pool)
            .await
    }

    /// Pending ledger rows for a department, joined with trial and
    /// department metadata, oldest first (work queue order).
    pub async fn pending_for_department(
        pool: &PgPool,
        department_id: DbId,
    ) -> Result<Vec<PendingProgressItem>, sqlx::Error> {
        sqlx::query_as::<_, PendingProgressItem>(
            "SELECT
                dp.trial_id,
                tc.part_name,
                tc.pattern_code,
                tc.status AS trial_status,
                dp.department_id,
                d.name AS department_name,
                dp.stage,
                dp.remarks,
                dp.created_at AS received_at
             FROM department_progress dp
             JOIN trial_cards tc ON tc.trial_id = dp.trial_id
             JOIN departments d ON d.id = dp.department_id
             WHERE dp.department_id = $1
               AND dp.approval_status = 'pending'
               AND tc.deleted_at IS NULL
             ORDER BY dp.created_at ASC",
        )
        .bind(department_id)
        .fetch_all(pool)
        .await
    }

    /// Approved ledger rows for a department, newest-first.
    pub async fn completed_for_department(
        pool: &PgPool,
        department_id: DbId,
    ) -> Result<Vec<CompletedProgressItem>, sqlx::Error> {
        sqlx::query_as::<_, CompletedProgressItem>(
            "SELECT
                dp.trial_id,
                tc.part_name,
                tc.pattern_code,
                tc.status AS trial_status,
                dp.department_id,
                d.name AS department_name,
                dp.completed_at,
                dp.remarks
             FROM department_progress dp
             JOIN trial_cards tc ON tc.trial_id = dp.trial_id
             JOIN departments d ON d.id = dp.department_id
             WHERE dp.department_id = $1
               AND dp.approval_status = 'approved'
               AND tc.deleted_at IS NULL
             ORDER BY dp.completed_at DESC",
        )
        .bind(department_id)
        .fetch_all(pool)
        .await
    }
}
