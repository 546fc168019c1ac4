//! Repository for the `master_cards` table.

use sqlx::{PgConnection, PgPool};

use crate::models::master_card::{CreateMasterCard, MasterCard, UpdateMasterCard};

/// Column list for master_cards queries.
const COLUMNS: &str = "\
    id, pattern_code, part_name, material_grade, chemical_composition, \
    tensile_requirement, microstructure, hardness, tooling_datasheet, \
    remarks, created_at, updated_at";

/// Provides CRUD operations for the master list.
pub struct MasterCardRepo;

impl MasterCardRepo {
    /// Insert a new master card. Duplicate pattern codes violate
    /// `uq_master_cards_pattern_code`.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateMasterCard,
    ) -> Result<MasterCard, sqlx::Error> {
        let query = format!(
            "INSERT INTO master_cards
                (pattern_code, part_name, material_grade, chemical_composition,
                 tensile_requirement, microstructure, hardness, tooling_datasheet,
                 remarks)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MasterCard>(&query)
            .bind(&input.pattern_code)
            .bind(&input.part_name)
            .bind(&input.material_grade)
            .bind(&input.chemical_composition)
            .bind(&input.tensile_requirement)
            .bind(&input.microstructure)
            .bind(&input.hardness)
            .bind(&input.tooling_datasheet)
            .bind(&input.remarks)
            .fetch_one(conn)
            .await
    }

    /// Partially update a master card. Absent fields keep stored values.
    pub async fn update(
        conn: &mut PgConnection,
        pattern_code: &str,
        input: &UpdateMasterCard,
    ) -> Result<Option<MasterCard>, sqlx::Error> {
        let query = format!(
            "UPDATE master_cards SET
                part_name = COALESCE($1, part_name),
                material_grade = COALESCE($2, material_grade),
                chemical_composition = COALESCE($3, chemical_composition),
                tensile_requirement = COALESCE($4, tensile_requirement),
                microstructure = COALESCE($5, microstructure),
                hardness = COALESCE($6, hardness),
                tooling_datasheet = COALESCE($7, tooling_datasheet),
                remarks = COALESCE($8, remarks),
                updated_at = now()
             WHERE pattern_code = $9
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MasterCard>(&query)
            .bind(&input.part_name)
            .bind(&input.material_grade)
            .bind(&input.chemical_composition)
            .bind(&input.tensile_requirement)
            .bind(&input.microstructure)
            .bind(&input.hardness)
            .bind(&input.tooling_datasheet)
            .bind(&input.remarks)
            .bind(pattern_code)
            .fetch_optional(conn)
            .await
    }

    /// List all master cards, ordered by pattern code.
    pub async fn list(pool: &PgPool) -> Result<Vec<MasterCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM master_cards ORDER BY pattern_code ASC");
        sqlx::query_as::<_, MasterCard>(&query).fetch_all(pool).await
    }

    /// Find a master card by pattern code.
    pub async fn find_by_pattern_code(
        pool: &PgPool,
        pattern_code: &str,
    ) -> Result<Option<MasterCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM master_cards WHERE pattern_code = $1");
        sqlx::query_as::<_, MasterCard>(&query)
            .bind(pattern_code)
            .fetch_optional(pool)
            .await
    }
}
