//! HTTP-level integration tests for the inspection controllers, pinning
//! the role-dispatched transition semantics and the COALESCE update
//! behaviour shared by all seven forms.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, create_trial, send, send_json, token_for};
use sqlx::PgPool;

/// Fetch (current_department_id, status) for a trial.
async fn trial_state(pool: &PgPool, trial_id: &str) -> (i64, String) {
    sqlx::query_as("SELECT current_department_id, status FROM trial_cards WHERE trial_id = $1")
        .bind(trial_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Fetch the stage of the pending ledger row for a trial.
async fn pending_stage(pool: &PgPool, trial_id: &str) -> String {
    let row: (String,) = sqlx::query_as(
        "SELECT stage FROM department_progress
         WHERE trial_id = $1 AND approval_status = 'pending'",
    )
    .bind(trial_id)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_submission_hands_off_without_moving_department(pool: PgPool) {
    create_trial(&pool, "VALVE-01").await;

    let token = token_for(3, "sand-op", "user", 3);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/sand-properties",
        &token,
        serde_json::json!({
            "trial_id": "VALVE-01",
            "moisture_percent": 3.4,
            "green_compression_strength": 17.8,
            "compactability": 38.0,
            "test_readings": [
                {"parameter": "GCS", "specified": "15-20", "actual": "17.8"}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // role=user, no draft: stage flips to review, pointer stays put.
    let (dept, _) = trial_state(&pool, "VALVE-01").await;
    assert_eq!(dept, 2);
    assert_eq!(pending_stage(&pool, "VALVE-01").await, "review");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hod_update_approves_and_advances_department(pool: PgPool) {
    create_trial(&pool, "VALVE-02").await;

    // User files the record first.
    let user_token = token_for(3, "sand-op", "user", 3);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/sand-properties",
        &user_token,
        serde_json::json!({
            "trial_id": "VALVE-02",
            "moisture_percent": 3.1,
            "green_compression_strength": 16.2
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // HOD review pass (no edit, no draft) advances the pipeline.
    let hod_token = token_for(4, "sand-hod", "hod", 3);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::PUT,
        "/api/v1/inspections/sand-properties/VALVE-02",
        &hod_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (dept, status) = trial_state(&pool, "VALVE-02").await;
    assert_eq!(dept, 3, "Methods hands over to Sand Plant");
    assert_eq!(status, "IN_PROGRESS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn draft_submission_forwards_directly(pool: PgPool) {
    create_trial(&pool, "VALVE-03").await;

    let token = token_for(3, "sand-op", "user", 3);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/sand-properties",
        &token,
        serde_json::json!({
            "trial_id": "VALVE-03",
            "moisture_percent": 3.2,
            "green_compression_strength": 18.0,
            "is_draft": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let (dept, _) = trial_state(&pool, "VALVE-03").await;
    assert_eq!(dept, 3, "draft save-and-forward skips the review step");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_submission_fires_no_automatic_transition(pool: PgPool) {
    create_trial(&pool, "VALVE-04").await;

    let token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/sand-properties",
        &token,
        serde_json::json!({
            "trial_id": "VALVE-04",
            "moisture_percent": 3.0,
            "green_compression_strength": 15.5
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let (dept, _) = trial_state(&pool, "VALVE-04").await;
    assert_eq!(dept, 2);
    assert_eq!(pending_stage(&pool, "VALVE-04").await, "entry");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_override_endpoint_advances_explicitly(pool: PgPool) {
    create_trial(&pool, "VALVE-05").await;

    let token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/progress/VALVE-05/approve",
        &token,
        serde_json::json!({ "remarks": "unblocking stuck trial" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (dept, _) = trial_state(&pool, "VALVE-05").await;
    assert_eq!(dept, 3);

    // Non-admins cannot reach the override.
    let hod_token = token_for(4, "sand-hod", "hod", 3);
    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/progress/VALVE-05/approve",
        &hod_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_leaves_absent_fields_untouched(pool: PgPool) {
    create_trial(&pool, "VALVE-06").await;

    let token = token_for(5, "qa-op", "user", 7);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/dimensional",
        &token,
        serde_json::json!({
            "trial_id": "VALVE-06",
            "casting_weight": 42.5,
            "dimensions": [
                {"characteristic": "bore dia", "specified": "50.0 +/- 0.2", "actual": "50.1"}
            ],
            "remarks": "first article"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Edit only the remarks; every other stored field must survive.
    let response = send_json(
        build_test_app(pool.clone()),
        Method::PUT,
        "/api/v1/inspections/dimensional/VALVE-06",
        &token,
        serde_json::json!({
            "remarks": "re-measured after fettling",
            "is_edit": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["casting_weight"], 42.5);
    assert_eq!(json["data"]["remarks"], "re-measured after fettling");
    assert_eq!(json["data"]["dimensions"][0]["characteristic"], "bore dia");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_inspection_record_conflicts(pool: PgPool) {
    create_trial(&pool, "VALVE-07").await;

    let token = token_for(8, "mc-op", "user", 8);
    let body = serde_json::json!({
        "trial_id": "VALVE-07",
        "operations": [{"operation": "face milling", "result": "ok"}]
    });

    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/machine-shop",
        &token,
        body.clone(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/inspections/machine-shop",
        &token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inspection_for_unknown_trial_returns_404(pool: PgPool) {
    let token = token_for(3, "sand-op", "user", 3);
    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/inspections/sand-properties",
        &token,
        serde_json::json!({
            "trial_id": "GHOST-01",
            "moisture_percent": 3.0,
            "green_compression_strength": 15.0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_is_rejected_before_any_write(pool: PgPool) {
    create_trial(&pool, "VALVE-08").await;

    let token = token_for(6, "met-op", "user", 5);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/inspections/metallurgical",
        &token,
        serde_json::json!({
            "trial_id": "VALVE-08",
            "pouring_temp_c": 1395.0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM metallurgical_inspections")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);

    // The rejected submission must not have advanced anything either.
    assert_eq!(pending_stage(&pool, "VALVE-08").await, "entry");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pending_and_completed_views_track_the_queue(pool: PgPool) {
    create_trial(&pool, "VALVE-09").await;

    // Methods queue shows the new trial.
    let methods_token = token_for(2, "methods-hod", "hod", 2);
    let response = send(
        build_test_app(pool.clone()),
        Method::GET,
        "/api/v1/progress/pending?department_id=2",
        &methods_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["trial_id"], "VALVE-09");
    assert_eq!(json["data"][0]["department_name"], "Methods");

    // Advance past Methods via the admin override.
    let admin_token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/progress/VALVE-09/approve",
        &admin_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Methods now sees it as completed; Sand Plant sees it pending.
    let response = send(
        build_test_app(pool.clone()),
        Method::GET,
        "/api/v1/progress/completed",
        &methods_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["trial_id"], "VALVE-09");

    let sand_token = token_for(4, "sand-hod", "hod", 3);
    let response = send(
        build_test_app(pool),
        Method::GET,
        "/api/v1/progress/pending",
        &sand_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["trial_id"], "VALVE-09");
    assert_eq!(json["data"][0]["department_id"], 3);
}
