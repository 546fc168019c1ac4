//! HTTP-level integration tests for admin user creation and the
//! persistent password-reset OTP store.

mod common;

use axum::http::{Method, StatusCode};
use common::{build_test_app, send_json, token_for};
use sha2::{Digest, Sha256};
use sqlx::PgPool;

fn user_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": format!("{username}@foundry.local"),
        "password": "initial-password",
        "role": "user",
        "department_id": 3
    })
}

async fn create_user(pool: &PgPool, username: &str) {
    let admin_token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/admin/users",
        &admin_token,
        user_body(username),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED, "user setup failed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_creates_users_and_duplicates_conflict(pool: PgPool) {
    create_user(&pool, "sand-op").await;

    let admin_token = token_for(9, "sysadmin", "admin", 1);

    // Same username again: business-rule conflict before any write.
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/admin/users",
        &admin_token,
        user_body("sand-op"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Unknown roles are rejected.
    let mut body = user_body("other-op");
    body["role"] = serde_json::json!("superuser");
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/admin/users",
        &admin_token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Non-admins cannot create users.
    let user_token = token_for(3, "sand-op", "user", 3);
    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/admin/users",
        &user_token,
        user_body("third-op"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn forgot_password_is_neutral_and_persists_the_code(pool: PgPool) {
    create_user(&pool, "sand-op").await;

    // Unknown usernames get the same neutral answer.
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/auth/forgot-password",
        "",
        serde_json::json!({ "username": "nobody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/auth/forgot-password",
        "",
        serde_json::json!({ "username": "sand-op" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The code survives in the database (hashed), not in process memory.
    let count: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM password_reset_otps
         WHERE username = 'sand-op' AND consumed_at IS NULL AND expires_at > now()",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reset_password_consumes_a_valid_code(pool: PgPool) {
    create_user(&pool, "sand-op").await;

    // Plant a known code directly, as the mailer would have delivered it.
    let otp_hash = format!("{:x}", Sha256::digest(b"123456"));
    sqlx::query(
        "INSERT INTO password_reset_otps (username, otp_hash, expires_at)
         VALUES ('sand-op', $1, now() + interval '10 minutes')",
    )
    .bind(&otp_hash)
    .execute(&pool)
    .await
    .unwrap();

    // Wrong code is rejected.
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/auth/reset-password",
        "",
        serde_json::json!({
            "username": "sand-op",
            "otp": "654321",
            "new_password": "fresh-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correct code updates the hash and consumes the OTP.
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/auth/reset-password",
        "",
        serde_json::json!({
            "username": "sand-op",
            "otp": "123456",
            "new_password": "fresh-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let row: (String,) =
        sqlx::query_as("SELECT password_hash FROM users WHERE username = 'sand-op'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(
        foundry_api::auth::password::verify_password("fresh-password", &row.0).unwrap(),
        "new password must verify against the stored hash"
    );

    // Replay is rejected: the code was consumed.
    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/auth/reset-password",
        "",
        serde_json::json!({
            "username": "sand-op",
            "otp": "123456",
            "new_password": "another-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
