//! Department progress ledger models.

use foundry_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `department_progress` ledger.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DepartmentProgress {
    pub id: DbId,
    pub trial_id: String,
    pub department_id: DbId,
    pub approval_status: String,
    pub stage: String,
    pub remarks: Option<String>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A pending ledger row joined with trial and department metadata, as
/// returned by the progress views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingProgressItem {
    pub trial_id: String,
    pub part_name: String,
    pub pattern_code: String,
    pub trial_status: String,
    pub department_id: DbId,
    pub department_name: String,
    pub stage: String,
    pub remarks: Option<String>,
    pub received_at: Timestamp,
}

/// An approved ledger row joined with trial and department metadata.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompletedProgressItem {
    pub trial_id: String,
    pub part_name: String,
    pub pattern_code: String,
    pub trial_status: String,
    pub department_id: DbId,
    pub department_name: String,
    pub completed_at: Option<Timestamp>,
    pub remarks: Option<String>,
}
