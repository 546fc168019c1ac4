//! HTTP-level integration tests for the master list and its parsed
//! specifications view.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, send, send_json, token_for};
use sqlx::PgPool;

fn card_body() -> serde_json::Value {
    serde_json::json!({
        "pattern_code": "PTN-104",
        "part_name": "Impeller",
        "material_grade": "SG500/7",
        "chemical_composition": "C: 3.45 Si: 2.30 Mn: 0.35 Mg: 0.045",
        "tensile_requirement": "Tensile \u{2265}550 MPa Yield \u{2265}320 MPa Elongation \u{2265}10",
        "microstructure": "Nodularity \u{2265}90%\nPearlite = 20",
        "hardness": "Surface: 180-220 BHN\nCore: 160-200 BHN"
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn master_card_write_is_admin_only(pool: PgPool) {
    let user_token = token_for(3, "sand-op", "user", 3);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/master-cards",
        &user_token,
        card_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin_token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/master-cards",
        &admin_token,
        card_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Duplicate pattern codes are a conflict.
    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/v1/master-cards",
        &admin_token,
        card_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn specifications_view_parses_legacy_text(pool: PgPool) {
    let admin_token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/master-cards",
        &admin_token,
        card_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let user_token = token_for(5, "qa-op", "user", 7);
    let response = send(
        build_test_app(pool),
        Method::GET,
        "/api/v1/master-cards/PTN-104/specifications",
        &user_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let specs = &json["data"];
    assert_eq!(specs["chemical_composition"]["c"], "3.45");
    assert_eq!(specs["chemical_composition"]["mg"], "0.045");
    assert_eq!(specs["tensile"]["tensile_strength"], "550");
    assert_eq!(specs["tensile"]["yield_strength"], "320");
    assert_eq!(specs["tensile"]["elongation"], "10");
    assert_eq!(specs["microstructure"]["nodularity"], "90");
    assert_eq!(specs["microstructure"]["carbide"], "--");
    assert_eq!(specs["hardness"]["surface"], "180-220");
    assert_eq!(specs["hardness"]["core"], "160-200");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn specifications_for_unknown_pattern_return_404(pool: PgPool) {
    let token = token_for(5, "qa-op", "user", 7);
    let response = send(
        build_test_app(pool),
        Method::GET,
        "/api/v1/master-cards/NOPE-1/specifications",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn master_card_update_keeps_absent_fields(pool: PgPool) {
    let admin_token = token_for(9, "sysadmin", "admin", 1);
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/v1/master-cards",
        &admin_token,
        card_body(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send_json(
        build_test_app(pool),
        Method::PUT,
        "/api/v1/master-cards/PTN-104",
        &admin_token,
        serde_json::json!({ "hardness": "Surface: 190-230 BHN" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["hardness"], "Surface: 190-230 BHN");
    // Untouched columns keep their values.
    assert_eq!(json["data"]["part_name"], "Impeller");
    assert_eq!(
        json["data"]["chemical_composition"],
        "C: 3.45 Si: 2.30 Mn: 0.35 Mg: 0.045"
    );
}
