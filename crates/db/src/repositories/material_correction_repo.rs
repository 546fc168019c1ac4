//! Repository for the `material_corrections` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::material_correction::{
    CreateMaterialCorrection, MaterialCorrection, UpdateMaterialCorrection,
};

/// Column list for material_corrections queries.
const COLUMNS: &str = "\
    id, trial_id, correction_type, furnace_no, additions, remarks, \
    created_at, updated_at";

/// Provides CRUD operations for material correction records.
pub struct MaterialCorrectionRepo;

impl MaterialCorrectionRepo {
    /// Insert a new record on the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMaterialCorrection,
    ) -> Result<MaterialCorrection, sqlx::Error> {
        let query = format!(
            "INSERT INTO material_corrections
                (trial_id, correction_type, furnace_no, additions, remarks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialCorrection>(&query)
            .bind(&input.trial_id)
            .bind(&input.correction_type)
            .bind(&input.furnace_no)
            .bind(Json(&input.additions))
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateMaterialCorrection,
    ) -> Result<Option<MaterialCorrection>, sqlx::Error> {
        let query = format!(
            "UPDATE material_corrections SET
                correction_type = COALESCE($1, correction_type),
                furnace_no = COALESCE($2, furnace_no),
                additions = COALESCE($3, additions),
                remarks = COALESCE($4, remarks),
                updated_at = now()
             WHERE trial_id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialCorrection>(&query)
            .bind(&input.correction_type)
            .bind(&input.furnace_no)
            .bind(input.additions.as_ref().map(Json))
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<MaterialCorrection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM material_corrections
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, MaterialCorrection>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MaterialCorrection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM material_corrections ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MaterialCorrection>(&query).fetch_all(pool).await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM material_corrections WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
