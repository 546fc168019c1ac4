//! Repository for the `dimensional_inspections` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::dimensional::{
    CreateDimensionalInspection, DimensionalInspection, UpdateDimensionalInspection,
};

/// Column list for dimensional_inspections queries.
const COLUMNS: &str = "\
    id, trial_id, casting_weight, dimensions, remarks, created_at, updated_at";

/// Provides CRUD operations for dimensional inspections.
pub struct DimensionalInspectionRepo;

impl DimensionalInspectionRepo {
    /// Insert a new record on the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateDimensionalInspection,
    ) -> Result<DimensionalInspection, sqlx::Error> {
        let query = format!(
            "INSERT INTO dimensional_inspections
                (trial_id, casting_weight, dimensions, remarks)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DimensionalInspection>(&query)
            .bind(&input.trial_id)
            .bind(input.casting_weight)
            .bind(Json(&input.dimensions))
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateDimensionalInspection,
    ) -> Result<Option<DimensionalInspection>, sqlx::Error> {
        let query = format!(
            "UPDATE dimensional_inspections SET
                casting_weight = COALESCE($1, casting_weight),
                dimensions = COALESCE($2, dimensions),
                remarks = COALESCE($3, remarks),
                updated_at = now()
             WHERE trial_id = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DimensionalInspection>(&query)
            .bind(input.casting_weight)
            .bind(input.dimensions.as_ref().map(Json))
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<DimensionalInspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dimensional_inspections
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, DimensionalInspection>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<DimensionalInspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dimensional_inspections ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, DimensionalInspection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM dimensional_inspections WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
