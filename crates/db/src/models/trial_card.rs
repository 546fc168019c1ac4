//! Trial card models.

use chrono::NaiveDate;
use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `trial_cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrialCard {
    pub id: DbId,
    pub trial_id: String,
    pub part_name: String,
    pub pattern_code: String,
    pub trial_type: String,
    pub material_grade: String,
    pub initiated_by: String,
    pub date_of_sampling: NaiveDate,
    pub plan_moulds: i32,
    pub reason_for_sampling: String,
    pub disa: Option<String>,
    pub sample_traceability: Option<String>,
    pub mould_correction: Option<String>,
    pub tooling_modification: Option<String>,
    pub remarks: Option<String>,
    pub status: String,
    pub current_department_id: DbId,
    pub deleted_at: Option<Timestamp>,
    pub deleted_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for trial creation (Methods department).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrialCard {
    pub trial_id: String,
    pub part_name: String,
    pub pattern_code: String,
    pub trial_type: String,
    pub material_grade: String,
    pub initiated_by: String,
    pub date_of_sampling: NaiveDate,
    pub plan_moulds: i32,
    pub reason_for_sampling: String,
    pub disa: Option<String>,
    pub sample_traceability: Option<String>,
    pub mould_correction: Option<String>,
    pub tooling_modification: Option<String>,
    pub remarks: Option<String>,
}
