//! Repository for the `sand_properties` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::sand_properties::{
    CreateSandProperties, SandProperties, UpdateSandProperties,
};

/// Column list for sand_properties queries.
const COLUMNS: &str = "\
    id, trial_id, moisture_percent, green_compression_strength, \
    compactability, permeability, loss_on_ignition, test_readings, \
    remarks, created_at, updated_at";

/// Provides CRUD operations for sand properties records.
pub struct SandPropertiesRepo;

impl SandPropertiesRepo {
    /// Insert a new record on the caller's transaction.
    ///
    /// Required fields are validated by the handler before the
    /// transaction begins; unwrapping here would be a handler bug.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateSandProperties,
    ) -> Result<SandProperties, sqlx::Error> {
        let query = format!(
            "INSERT INTO sand_properties
                (trial_id, moisture_percent, green_compression_strength,
                 compactability, permeability, loss_on_ignition, test_readings,
                 remarks)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SandProperties>(&query)
            .bind(&input.trial_id)
            .bind(input.moisture_percent)
            .bind(input.green_compression_strength)
            .bind(input.compactability)
            .bind(input.permeability)
            .bind(input.loss_on_ignition)
            .bind(Json(&input.test_readings))
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial. Absent fields keep their
    /// stored values.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateSandProperties,
    ) -> Result<Option<SandProperties>, sqlx::Error> {
        let query = format!(
            "UPDATE sand_properties SET
                moisture_percent = COALESCE($1, moisture_percent),
                green_compression_strength = COALESCE($2, green_compression_strength),
                compactability = COALESCE($3, compactability),
                permeability = COALESCE($4, permeability),
                loss_on_ignition = COALESCE($5, loss_on_ignition),
                test_readings = COALESCE($6, test_readings),
                remarks = COALESCE($7, remarks),
                updated_at = now()
             WHERE trial_id = $8
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SandProperties>(&query)
            .bind(input.moisture_percent)
            .bind(input.green_compression_strength)
            .bind(input.compactability)
            .bind(input.permeability)
            .bind(input.loss_on_ignition)
            .bind(input.test_readings.as_ref().map(Json))
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial, taking the first row when legacy
    /// duplicates exist.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<SandProperties>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sand_properties
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, SandProperties>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first. Table sizes stay small.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SandProperties>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sand_properties ORDER BY created_at DESC");
        sqlx::query_as::<_, SandProperties>(&query).fetch_all(pool).await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM sand_properties WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
