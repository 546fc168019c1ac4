//! Repository for the `departments` lookup table.

use foundry_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::Department;

/// Column list for departments queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides read operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY id ASC");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// Find a department by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
