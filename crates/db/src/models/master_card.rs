//! Master-list specification models.

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `master_cards` table.
///
/// The spec text fields (`chemical_composition`, `tensile_requirement`,
/// `microstructure`, `hardness`) are loosely typed legacy text; the display
/// parser in `foundry_core::specparse` derives structured values from them
/// read-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MasterCard {
    pub id: DbId,
    pub pattern_code: String,
    pub part_name: String,
    pub material_grade: String,
    pub chemical_composition: Option<String>,
    pub tensile_requirement: Option<String>,
    pub microstructure: Option<String>,
    pub hardness: Option<String>,
    pub tooling_datasheet: Option<serde_json::Value>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a master card.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMasterCard {
    pub pattern_code: String,
    pub part_name: String,
    pub material_grade: String,
    pub chemical_composition: Option<String>,
    pub tensile_requirement: Option<String>,
    pub microstructure: Option<String>,
    pub hardness: Option<String>,
    pub tooling_datasheet: Option<serde_json::Value>,
    pub remarks: Option<String>,
}

/// Request body for updating a master card. Absent fields keep their
/// stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMasterCard {
    pub part_name: Option<String>,
    pub material_grade: Option<String>,
    pub chemical_composition: Option<String>,
    pub tensile_requirement: Option<String>,
    pub microstructure: Option<String>,
    pub hardness: Option<String>,
    pub tooling_datasheet: Option<serde_json::Value>,
    pub remarks: Option<String>,
}
