//! Material correction models (Metallurgy).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One charge addition inside a material correction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeAdditionRow {
    pub material: String,
    pub quantity_kg: f64,
}

/// A row from the `material_corrections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaterialCorrection {
    pub id: DbId,
    pub trial_id: String,
    pub correction_type: String,
    pub furnace_no: Option<String>,
    pub additions: Json<Vec<ChargeAdditionRow>>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a material correction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterialCorrection {
    pub trial_id: String,
    pub correction_type: Option<String>,
    pub furnace_no: Option<String>,
    #[serde(default)]
    pub additions: Vec<ChargeAdditionRow>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a material correction.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMaterialCorrection {
    pub correction_type: Option<String>,
    pub furnace_no: Option<String>,
    pub additions: Option<Vec<ChargeAdditionRow>>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
