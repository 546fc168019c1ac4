//! Password-reset OTP models.

use foundry_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `password_reset_otps` table. Only the SHA-256 hash of
/// the code is stored; the plaintext goes out by email and is never
/// persisted.
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetOtp {
    pub id: DbId,
    pub username: String,
    pub otp_hash: String,
    pub expires_at: Timestamp,
    pub consumed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
