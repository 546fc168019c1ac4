//! Repository for the `users` table.

use sqlx::{PgConnection, PgPool};

use crate::models::user::{CreateUser, User};

/// Column list for users queries.
const COLUMNS: &str = "\
    id, username, email, password_hash, role, department_id, is_active, \
    created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. A duplicate username violates
    /// `uq_users_username` and surfaces as a conflict.
    pub async fn create(conn: &mut PgConnection, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role, department_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(input.department_id)
            .fetch_one(conn)
            .await
    }

    /// Find an active user by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE username = $1 AND is_active = TRUE"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Replace a user's password hash.
    pub async fn update_password_hash(
        conn: &mut PgConnection,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users
             SET password_hash = $1, updated_at = now()
             WHERE username = $2 AND is_active = TRUE",
        )
        .bind(password_hash)
        .bind(username)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
