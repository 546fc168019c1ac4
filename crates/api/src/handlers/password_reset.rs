//! Password-reset flow backed by the persistent OTP store.
//!
//! The code is six digits, lives for a configurable TTL, and only its
//! SHA-256 hash is stored, so neither a database leak nor a restart
//! compromises or loses outstanding resets. Responses never disclose
//! whether a username exists. OTP mail goes out fire-and-forget; an SMTP
//! failure must never roll back the request.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use foundry_core::audit::actions;
use foundry_core::error::CoreError;
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::repositories::{AuditLogRepo, OtpRepo, UserRepo};
use rand::Rng;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for requesting a reset code.
#[derive(Debug, Deserialize)]
pub struct RequestOtp {
    pub username: String,
}

/// Request body for confirming a reset.
#[derive(Debug, Deserialize)]
pub struct ConfirmReset {
    pub username: String,
    pub otp: String,
    pub new_password: String,
}

/// Generate a six-digit reset code.
fn generate_otp() -> String {
    let code: u32 = rand::rng().random_range(0..1_000_000);
    format!("{code:06}")
}

/// SHA-256 hex digest of a reset code.
fn hash_otp(otp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(otp.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// POST /api/v1/auth/forgot-password
///
/// Issue a reset code for the given username and email it out. Always
/// answers 200 with a neutral message.
pub async fn request_otp(
    State(state): State<AppState>,
    Json(input): Json<RequestOtp>,
) -> AppResult<impl IntoResponse> {
    let neutral = Json(DataResponse {
        data: serde_json::json!({
            "message": "If the account exists, a reset code has been sent"
        }),
    });

    let Some(user) = UserRepo::find_by_username(&state.pool, &input.username).await? else {
        return Ok(neutral);
    };

    let otp = generate_otp();
    let mut conn = state.pool.acquire().await?;
    OtpRepo::create(
        &mut conn,
        &user.username,
        &hash_otp(&otp),
        state.config.otp_ttl_minutes,
    )
    .await?;

    // Opportunistic cleanup of stale codes.
    if let Err(e) = OtpRepo::delete_expired(&state.pool).await {
        tracing::warn!(error = %e, "Failed to purge expired reset codes");
    }

    match (&state.mailer, &user.email) {
        (Some(mailer), Some(email)) => {
            mailer.send_detached(
                email.clone(),
                "Password reset code".to_string(),
                format!(
                    "Your password reset code is {otp}. It expires in {} minutes.",
                    state.config.otp_ttl_minutes
                ),
            );
        }
        _ => {
            tracing::warn!(
                username = %user.username,
                "Reset code issued but no mailer or email address configured"
            );
        }
    }

    tracing::info!(username = %user.username, "Password reset code issued");
    Ok(neutral)
}

/// POST /api/v1/auth/reset-password
///
/// Verify the reset code, consume it, and store the new password hash.
pub async fn confirm_reset(
    State(state): State<AppState>,
    Json(input): Json<ConfirmReset>,
) -> AppResult<impl IntoResponse> {
    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let otp = OtpRepo::find_valid(&state.pool, &input.username, &hash_otp(&input.otp))
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired reset code".into(),
            ))
        })?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let mut tx = state.pool.begin().await?;
    let updated = UserRepo::update_password_hash(&mut tx, &input.username, &password_hash).await?;
    if !updated {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired reset code".into(),
        )));
    }
    OtpRepo::consume(&mut tx, otp.id).await?;
    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: None,
            username: input.username.clone(),
            department_id: None,
            trial_id: None,
            action: actions::PASSWORD_RESET.to_string(),
            remarks: None,
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(username = %input.username, "Password reset completed");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "message": "Password updated" }),
    }))
}
