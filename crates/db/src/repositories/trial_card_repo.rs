//! Repository for the `trial_cards` table.

use foundry_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::trial_card::{CreateTrialCard, TrialCard};

/// Column list for trial_cards queries.
const COLUMNS: &str = "\
    id, trial_id, part_name, pattern_code, trial_type, material_grade, \
    initiated_by, date_of_sampling, plan_moulds, reason_for_sampling, \
    disa, sample_traceability, mould_correction, tooling_modification, \
    remarks, status, current_department_id, deleted_at, deleted_by, \
    created_at, updated_at";

/// Provides CRUD operations for trial cards.
pub struct TrialCardRepo;

impl TrialCardRepo {
    /// Insert a new trial card owned by the given initial department.
    ///
    /// Runs on the caller's transaction: a trial card must never exist
    /// without its first ledger row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateTrialCard,
        initial_department_id: DbId,
    ) -> Result<TrialCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO trial_cards
                (trial_id, part_name, pattern_code, trial_type, material_grade,
                 initiated_by, date_of_sampling, plan_moulds, reason_for_sampling,
                 disa, sample_traceability, mould_correction, tooling_modification,
                 remarks, current_department_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrialCard>(&query)
            .bind(&input.trial_id)
            .bind(&input.part_name)
            .bind(&input.pattern_code)
            .bind(&input.trial_type)
            .bind(&input.material_grade)
            .bind(&input.initiated_by)
            .bind(input.date_of_sampling)
            .bind(input.plan_moulds)
            .bind(&input.reason_for_sampling)
            .bind(&input.disa)
            .bind(&input.sample_traceability)
            .bind(&input.mould_correction)
            .bind(&input.tooling_modification)
            .bind(&input.remarks)
            .bind(initial_department_id)
            .fetch_one(conn)
            .await
    }

    /// Find a trial card by its user-facing trial id. Excludes soft-deleted.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<TrialCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trial_cards
             WHERE trial_id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, TrialCard>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a live trial with this id exists.
    pub async fn exists(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM trial_cards WHERE trial_id = $1 AND deleted_at IS NULL
             )",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }

    /// List all live trial cards, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<TrialCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trial_cards
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TrialCard>(&query).fetch_all(pool).await
    }

    /// Move the trial's department pointer.
    pub async fn set_current_department(
        conn: &mut PgConnection,
        trial_id: &str,
        department_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE trial_cards
             SET current_department_id = $1, updated_at = now()
             WHERE trial_id = $2 AND deleted_at IS NULL",
        )
        .bind(department_id)
        .bind(trial_id)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Set the trial status.
    pub async fn set_status(
        conn: &mut PgConnection,
        trial_id: &str,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE trial_cards
             SET status = $1, updated_at = now()
             WHERE trial_id = $2 AND deleted_at IS NULL",
        )
        .bind(status)
        .bind(trial_id)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Soft-delete a trial card, recording who removed it.
    pub async fn soft_delete(
        conn: &mut PgConnection,
        trial_id: &str,
        deleted_by: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trial_cards
             SET deleted_at = now(), deleted_by = $1, updated_at = now()
             WHERE trial_id = $2 AND deleted_at IS NULL",
        )
        .bind(deleted_by)
        .bind(trial_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
