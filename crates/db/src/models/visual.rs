//! Visual / NDT inspection models (Quality).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One observed defect inside a visual inspection record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualDefectRow {
    pub defect_type: String,
    pub severity: String,
    pub location: Option<String>,
}

/// A row from the `visual_inspections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisualInspection {
    pub id: DbId,
    pub trial_id: String,
    pub surface_condition: String,
    pub ndt_method: Option<String>,
    pub ndt_result: Option<String>,
    pub defects: Json<Vec<VisualDefectRow>>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a visual inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVisualInspection {
    pub trial_id: String,
    pub surface_condition: Option<String>,
    pub ndt_method: Option<String>,
    pub ndt_result: Option<String>,
    #[serde(default)]
    pub defects: Vec<VisualDefectRow>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a visual inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVisualInspection {
    pub surface_condition: Option<String>,
    pub ndt_method: Option<String>,
    pub ndt_result: Option<String>,
    pub defects: Option<Vec<VisualDefectRow>>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
