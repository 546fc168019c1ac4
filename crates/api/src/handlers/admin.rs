//! Admin user management handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use foundry_core::audit::actions;
use foundry_core::error::CoreError;
use foundry_core::roles::is_known_role;
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::models::user::{CreateUser, CreateUserRequest};
use foundry_db::repositories::{AuditLogRepo, DepartmentRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::require_text;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/users
///
/// Create a user. Admin only. Duplicate usernames are rejected with a
/// conflict before any write happens.
pub async fn create_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    require_text(&input.username, "username")?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    if !is_known_role(&input.role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{}'",
            input.role
        ))));
    }
    if DepartmentRepo::find_by_id(&state.pool, input.department_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id: input.department_id,
        }));
    }
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{}' is already taken",
            input.username
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateUser {
        username: input.username.clone(),
        email: input.email.clone(),
        password_hash,
        role: input.role.clone(),
        department_id: input.department_id,
    };

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(&mut tx, &create).await?;
    AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: Some(admin.user_id),
            username: admin.username.clone(),
            department_id: Some(admin.department_id),
            trial_id: None,
            action: actions::USER_CREATED.to_string(),
            remarks: Some(format!("created user {}", user.username)),
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        user_id = admin.user_id,
        new_user = %user.username,
        role = %user.role,
        "User created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}
