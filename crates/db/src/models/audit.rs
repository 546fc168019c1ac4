//! Audit log models.

use foundry_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `audit_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub username: String,
    pub department_id: Option<DbId>,
    pub trial_id: Option<String>,
    pub action: String,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending an audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub user_id: Option<DbId>,
    pub username: String,
    pub department_id: Option<DbId>,
    pub trial_id: Option<String>,
    pub action: String,
    pub remarks: Option<String>,
}

/// Filter parameters for the admin audit query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditQuery {
    pub trial_id: Option<String>,
    pub username: Option<String>,
    pub action: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
