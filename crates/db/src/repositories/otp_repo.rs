//! Repository for the `password_reset_otps` table.
//!
//! The persistent OTP store: codes survive restarts and are shared across
//! server processes. Expiry is enforced in SQL, not in process memory.

use chrono::Duration;
use sqlx::{PgConnection, PgPool};

use crate::models::otp::PasswordResetOtp;

/// Column list for password_reset_otps queries.
const COLUMNS: &str = "id, username, otp_hash, expires_at, consumed_at, created_at";

/// Provides operations for password-reset OTPs.
pub struct OtpRepo;

impl OtpRepo {
    /// Store a new OTP hash for a username, invalidating earlier codes.
    pub async fn create(
        conn: &mut PgConnection,
        username: &str,
        otp_hash: &str,
        ttl_minutes: i64,
    ) -> Result<PasswordResetOtp, sqlx::Error> {
        // A fresh request supersedes any outstanding code.
        sqlx::query(
            "UPDATE password_reset_otps
             SET consumed_at = now()
             WHERE username = $1 AND consumed_at IS NULL",
        )
        .bind(username)
        .execute(&mut *conn)
        .await?;

        let expires_at = chrono::Utc::now() + Duration::minutes(ttl_minutes);
        let query = format!(
            "INSERT INTO password_reset_otps (username, otp_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PasswordResetOtp>(&query)
            .bind(username)
            .bind(otp_hash)
            .bind(expires_at)
            .fetch_one(conn)
            .await
    }

    /// Find a live (unconsumed, unexpired) OTP matching the given hash.
    pub async fn find_valid(
        pool: &PgPool,
        username: &str,
        otp_hash: &str,
    ) -> Result<Option<PasswordResetOtp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM password_reset_otps
             WHERE username = $1
               AND otp_hash = $2
               AND consumed_at IS NULL
               AND expires_at > now()
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, PasswordResetOtp>(&query)
            .bind(username)
            .bind(otp_hash)
            .fetch_optional(pool)
            .await
    }

    /// Mark an OTP consumed so it cannot be replayed.
    pub async fn consume(conn: &mut PgConnection, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE password_reset_otps SET consumed_at = now() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Purge expired rows. Safe to call opportunistically.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM password_reset_otps WHERE expires_at <= now()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
