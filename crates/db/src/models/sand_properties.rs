//! Sand properties inspection models (Sand Plant).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One tabular test reading inside a sand properties record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandTestReading {
    pub parameter: String,
    pub specified: String,
    pub actual: String,
}

/// A row from the `sand_properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SandProperties {
    pub id: DbId,
    pub trial_id: String,
    pub moisture_percent: f64,
    pub green_compression_strength: f64,
    pub compactability: Option<f64>,
    pub permeability: Option<f64>,
    pub loss_on_ignition: Option<f64>,
    pub test_readings: Json<Vec<SandTestReading>>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a sand properties record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSandProperties {
    pub trial_id: String,
    pub moisture_percent: Option<f64>,
    pub green_compression_strength: Option<f64>,
    pub compactability: Option<f64>,
    pub permeability: Option<f64>,
    pub loss_on_ignition: Option<f64>,
    #[serde(default)]
    pub test_readings: Vec<SandTestReading>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a sand properties record. Absent fields keep
/// their stored values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSandProperties {
    pub moisture_percent: Option<f64>,
    pub green_compression_strength: Option<f64>,
    pub compactability: Option<f64>,
    pub permeability: Option<f64>,
    pub loss_on_ignition: Option<f64>,
    pub test_readings: Option<Vec<SandTestReading>>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
