//! Repository for the `metallurgical_inspections` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::metallurgical::{
    CreateMetallurgicalInspection, MetallurgicalInspection, UpdateMetallurgicalInspection,
};

/// Column list for metallurgical_inspections queries.
const COLUMNS: &str = "\
    id, trial_id, heat_code, pouring_temp_c, chemistry, nodularity_percent, \
    pearlite_percent, hardness_bhn, microstructure_remarks, remarks, \
    created_at, updated_at";

/// Provides CRUD operations for metallurgical inspections.
pub struct MetallurgicalInspectionRepo;

impl MetallurgicalInspectionRepo {
    /// Insert a new record on the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMetallurgicalInspection,
    ) -> Result<MetallurgicalInspection, sqlx::Error> {
        let query = format!(
            "INSERT INTO metallurgical_inspections
                (trial_id, heat_code, pouring_temp_c, chemistry,
                 nodularity_percent, pearlite_percent, hardness_bhn,
                 microstructure_remarks, remarks)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MetallurgicalInspection>(&query)
            .bind(&input.trial_id)
            .bind(&input.heat_code)
            .bind(input.pouring_temp_c)
            .bind(Json(&input.chemistry))
            .bind(input.nodularity_percent)
            .bind(input.pearlite_percent)
            .bind(input.hardness_bhn)
            .bind(&input.microstructure_remarks)
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateMetallurgicalInspection,
    ) -> Result<Option<MetallurgicalInspection>, sqlx::Error> {
        let query = format!(
            "UPDATE metallurgical_inspections SET
                heat_code = COALESCE($1, heat_code),
                pouring_temp_c = COALESCE($2, pouring_temp_c),
                chemistry = COALESCE($3, chemistry),
                nodularity_percent = COALESCE($4, nodularity_percent),
                pearlite_percent = COALESCE($5, pearlite_percent),
                hardness_bhn = COALESCE($6, hardness_bhn),
                microstructure_remarks = COALESCE($7, microstructure_remarks),
                remarks = COALESCE($8, remarks),
                updated_at = now()
             WHERE trial_id = $9
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MetallurgicalInspection>(&query)
            .bind(&input.heat_code)
            .bind(input.pouring_temp_c)
            .bind(input.chemistry.as_ref().map(Json))
            .bind(input.nodularity_percent)
            .bind(input.pearlite_percent)
            .bind(input.hardness_bhn)
            .bind(&input.microstructure_remarks)
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<MetallurgicalInspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM metallurgical_inspections
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, MetallurgicalInspection>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MetallurgicalInspection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM metallurgical_inspections ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MetallurgicalInspection>(&query)
            .fetch_all(pool)
            .await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM metallurgical_inspections WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
