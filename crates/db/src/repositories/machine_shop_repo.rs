//! Repository for the `machine_shop_records` table.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};

use crate::models::machine_shop::{
    CreateMachineShopRecord, MachineShopRecord, UpdateMachineShopRecord,
};

/// Column list for machine_shop_records queries.
const COLUMNS: &str = "\
    id, trial_id, operations, rejection_count, rejection_reason, remarks, \
    created_at, updated_at";

/// Provides CRUD operations for machine shop records.
pub struct MachineShopRepo;

impl MachineShopRepo {
    /// Insert a new record on the caller's transaction.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMachineShopRecord,
    ) -> Result<MachineShopRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO machine_shop_records
                (trial_id, operations, rejection_count, rejection_reason, remarks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MachineShopRecord>(&query)
            .bind(&input.trial_id)
            .bind(Json(&input.operations))
            .bind(input.rejection_count)
            .bind(&input.rejection_reason)
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update the record for a trial.
    pub async fn update(
        conn: &mut PgConnection,
        trial_id: &str,
        input: &UpdateMachineShopRecord,
    ) -> Result<Option<MachineShopRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE machine_shop_records SET
                operations = COALESCE($1, operations),
                rejection_count = COALESCE($2, rejection_count),
                rejection_reason = COALESCE($3, rejection_reason),
                remarks = COALESCE($4, remarks),
                updated_at = now()
             WHERE trial_id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MachineShopRecord>(&query)
            .bind(input.operations.as_ref().map(Json))
            .bind(input.rejection_count)
            .bind(&input.rejection_reason)
            .bind(&input.remarks)
            .bind(trial_id)
            .fetch_optional(conn)
            .await
    }

    /// Find the record for a trial.
    pub async fn find_by_trial_id(
        pool: &PgPool,
        trial_id: &str,
    ) -> Result<Option<MachineShopRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM machine_shop_records
             WHERE trial_id = $1
             ORDER BY id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, MachineShopRecord>(&query)
            .bind(trial_id)
            .fetch_optional(pool)
            .await
    }

    /// Unfiltered dump, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MachineShopRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM machine_shop_records ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, MachineShopRecord>(&query).fetch_all(pool).await
    }

    /// Whether a record already exists for the trial.
    pub async fn exists_for_trial(pool: &PgPool, trial_id: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM machine_shop_records WHERE trial_id = $1)",
        )
        .bind(trial_id)
        .fetch_one(pool)
        .await
    }
}
