//! Mould correction models (Moulding).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One correction row inside a mould correction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouldCorrectionRow {
    pub defect: String,
    pub action: String,
    pub status: Option<String>,
}

/// A row from the `mould_corrections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MouldCorrection {
    pub id: DbId,
    pub trial_id: String,
    pub disa_line: String,
    pub cavities_per_mould: Option<i32>,
    pub corrections: Json<Vec<MouldCorrectionRow>>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a mould correction record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMouldCorrection {
    pub trial_id: String,
    pub disa_line: Option<String>,
    pub cavities_per_mould: Option<i32>,
    #[serde(default)]
    pub corrections: Vec<MouldCorrectionRow>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a mould correction record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMouldCorrection {
    pub disa_line: Option<String>,
    pub cavities_per_mould: Option<i32>,
    pub corrections: Option<Vec<MouldCorrectionRow>>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
