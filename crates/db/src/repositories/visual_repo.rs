//! Repository for the `visual_inspections` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::visual::{CreateVisualInspection, UpdateVisualInspection, VisualInspection};

/// Column list for visual_inspections queries.
const COLUMNS: &str = "\
    id, trial_id, surface_condition, ndt_method, ndt_result, defects, \
    remarks, created_at, updated_at";

/// Provides CRUD operations for visual / NDT inspections.
pub struct VisualInspectionRepo;

impl VisualInspectionRepo {
    /// Insert a new record on the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateVisualInspection,
    ) -> Result<VisualInspection, sqlx::Error> {
        let query = format!(
            "INSERT INTO visual_inspections
                (trial_id, surface_condition, ndt_method, ndt_result, defects, remarks)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisualInspection>(&query)
            .bind(&input.trial_id)
            .bind(&input.surface_condition)
            .bind(&input.ndt_method)
            .bind(&input.ndt_result)
            .bind(Json(&input.defects))
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateVisualInspection,
    ) -> Result<Option<VisualInspection>, sqlx::Error> {
        let query = format!(
            "UPDATE visual_inspections SET
                surface_condition = COALESCE($1, surface_condition),
                ndt_method = COALESCE($2, ndt_method),
                ndt_result = COALESCE($3, ndt_result),
                defects = COALESCE($4, defects),
                remarks = COALESCE($5, remarks),
                updated_at = now()
             WHERE trial_id = $6
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VisualInspection>(&query)
            .bind(&input.surface_condition)
            .bind(&input.ndt_method)
            .bind(&input.ndt_result)
            .bind(input.defects.as_ref().map(Json))
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<VisualInspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM visual_inspections
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, VisualInspection>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VisualInspection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visual_inspections ORDER BY created_at DESC");
        sqlx::query_as::<_, VisualInspection>(&query).fetch_all(pool).await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM visual_inspections WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
