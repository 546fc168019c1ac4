//! Repository for the `mould_corrections` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::mould_correction::{
    CreateMouldCorrection, MouldCorrection, UpdateMouldCorrection,
};

/// Column list for mould_corrections queries.
const COLUMNS: &str = "\
    id, trial_id, disa_line, cavities_per_mould, corrections, remarks, \
    created_at, updated_at";

/// Provides CRUD operations for mould correction records.
pub struct MouldCorrectionRepo;

impl MouldCorrectionRepo {
    /// Insert a new record on the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMouldCorrection,
    ) -> Result<MouldCorrection, sqlx::Error> {
        let query = format!(
            "INSERT INTO mould_corrections
                (trial_id, disa_line, cavities_per_mould, corrections, remarks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MouldCorrection>(&query)
            .bind(&input.trial_id)
            .bind(&input.disa_line)
            .bind(input.cavities_per_mould)
            .bind(Json(&input.corrections))
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateMouldCorrection,
    ) -> Result<Option<MouldCorrection>, sqlx::Error> {
        let query = format!(
            "UPDATE mould_corrections SET
                disa_line = COALESCE($1, disa_line),
                cavities_per_mould = COALESCE($2, cavities_per_mould),
                corrections = COALESCE($3, corrections),
                remarks = COALESCE($4, remarks),
                updated_at = now()
             WHERE trial_id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MouldCorrection>(&query)
            .bind(&input.disa_line)
            .bind(input.cavities_per_mould)
            .bind(input.corrections.as_ref().map(Json))
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<MouldCorrection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mould_corrections
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, MouldCorrection>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MouldCorrection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mould_corrections ORDER BY created_at DESC");
        sqlx::query_as::<_, MouldCorrection>(&query).fetch_all(pool).await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM mould_corrections WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
