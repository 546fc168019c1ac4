//! Dimensional inspection models (Quality).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One measured characteristic inside a dimensional inspection record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionReading {
    pub characteristic: String,
    pub specified: String,
    pub actual: String,
    pub instrument: Option<String>,
}

/// A row from the `dimensional_inspections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DimensionalInspection {
    pub id: DbId,
    pub trial_id: String,
    pub casting_weight: f64,
    pub dimensions: Json<Vec<DimensionReading>>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a dimensional inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDimensionalInspection {
    pub trial_id: String,
    pub casting_weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Vec<DimensionReading>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a dimensional inspection.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDimensionalInspection {
    pub casting_weight: Option<f64>,
    pub dimensions: Option<Vec<DimensionReading>>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
