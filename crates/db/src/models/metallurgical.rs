//! Metallurgical inspection models (Metallurgy).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One chemistry reading: an element against its specified window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChemistryReading {
    pub element: String,
    pub specified: String,
    pub actual: String,
}

/// A row from the `metallurgical_inspections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MetallurgicalInspection {
    pub id: DbId,
    pub trial_id: String,
    pub heat_code: String,
    pub pouring_temp_c: f64,
    pub chemistry: Json<Vec<ChemistryReading>>,
    pub nodularity_percent: Option<f64>,
    pub pearlite_percent: Option<f64>,
    pub hardness_bhn: Option<i32>,
    pub microstructure_remarks: Option<String>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a metallurgical inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMetallurgicalInspection {
    pub trial_id: String,
    pub heat_code: Option<String>,
    pub pouring_temp_c: Option<f64>,
    #[serde(default)]
    pub chemistry: Vec<ChemistryReading>,
    pub nodularity_percent: Option<f64>,
    pub pearlite_percent: Option<f64>,
    pub hardness_bhn: Option<i32>,
    pub microstructure_remarks: Option<String>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a metallurgical inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMetallurgicalInspection {
    pub heat_code: Option<String>,
    pub pouring_temp_c: Option<f64>,
    pub chemistry: Option<Vec<ChemistryReading>>,
    pub nodularity_percent: Option<f64>,
    pub pearlite_percent: Option<f64>,
    pub hardness_bhn: Option<i32>,
    pub microstructure_remarks: Option<String>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
