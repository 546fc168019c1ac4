//! Repository for the `audit_logs` table. Insert-only plus the admin query.

use sqlx::{PgConnection, PgPool};

use crate::models::audit::{AuditLog, AuditQuery, CreateAuditLog};

/// Column list for audit_logs queries.
const COLUMNS: &str = "\
    id, user_id, username, department_id, trial_id, action, remarks, created_at";

/// Provides append and query operations for the audit trail.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append one audit entry on the caller's transaction.
    pub async fn insert(
        conn: &mut PgConnection,
        entry: &CreateAuditLog,
    ) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs
                (user_id, username, department_id, trial_id, action, remarks)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(entry.user_id)
            .bind(&entry.username)
            .bind(entry.department_id)
            .bind(&entry.trial_id)
            .bind(&entry.action)
            .bind(&entry.remarks)
            .fetch_one(conn)
            .await
    }

    /// Query audit entries with optional filters, newest first.
    pub async fn query(pool: &PgPool, params: &AuditQuery) -> Result<Vec<AuditLog>, sqlx::Error> {
        let limit = params.limit.unwrap_or(50).min(500);
        let offset = params.offset.unwrap_or(0);

        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs
             WHERE ($1::TEXT IS NULL OR trial_id = $1)
               AND ($2::TEXT IS NULL OR username = $2)
               AND ($3::TEXT IS NULL OR action = $3)
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(&params.trial_id)
            .bind(&params.username)
            .bind(&params.action)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count entries matching the same filters (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &AuditQuery) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM audit_logs
             WHERE ($1::TEXT IS NULL OR trial_id = $1)
               AND ($2::TEXT IS NULL OR username = $2)
               AND ($3::TEXT IS NULL OR action = $3)",
        )
        .bind(&params.trial_id)
        .bind(&params.username)
        .bind(&params.action)
        .fetch_one(pool)
        .await
    }
}
