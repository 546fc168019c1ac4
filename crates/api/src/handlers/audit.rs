//! Handlers for the audit trail query. Admin only.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use foundry_db::models::audit::{AuditLog, AuditQuery};
use foundry_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Audit page with pagination metadata.
#[derive(Debug, Serialize)]
pub struct AuditLogPage {
    pub entries: Vec<AuditLog>,
    pub total: i64,
}

/// GET /api/v1/admin/audit-logs
///
/// Query audit entries with optional trial/username/action filters,
/// newest first.
pub async fn query_audit_logs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> AppResult<impl IntoResponse> {
    let entries = AuditLogRepo::query(&state.pool, &params).await?;
    let total = AuditLogRepo::count(&state.pool, &params).await?;
    Ok(Json(DataResponse {
        data: AuditLogPage { entries, total },
    }))
}
