//! Machine shop record models (Machine Shop, terminal department).

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// One machining operation inside a machine shop record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachiningOperationRow {
    pub operation: String,
    pub machine: Option<String>,
    pub result: String,
}

/// A row from the `machine_shop_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MachineShopRecord {
    pub id: DbId,
    pub trial_id: String,
    pub operations: Json<Vec<MachiningOperationRow>>,
    pub rejection_count: Option<i32>,
    pub rejection_reason: Option<String>,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a machine shop record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMachineShopRecord {
    pub trial_id: String,
    #[serde(default)]
    pub operations: Vec<MachiningOperationRow>,
    pub rejection_count: Option<i32>,
    pub rejection_reason: Option<String>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Request body for updating a machine shop record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMachineShopRecord {
    pub operations: Option<Vec<MachiningOperationRow>>,
    pub rejection_count: Option<i32>,
    pub rejection_reason: Option<String>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub is_draft: bool,
}
