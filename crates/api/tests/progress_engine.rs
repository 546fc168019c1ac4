//! Transaction-level tests for the department progress transition service.
//!
//! These drive the engine directly over a pool connection, pinning the
//! ledger invariants: exactly one pending row per open trial, fixed
//! advancement order, closure at the terminal department, and rollback of
//! the whole bundle when any write in the transaction fails.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;

use foundry_api::engine::progress as engine;
use foundry_api::engine::progress::Advancement;
use foundry_api::error::AppError;
use foundry_core::departments::{
    DEPT_CORE_SHOP, DEPT_MACHINE_SHOP, DEPT_METALLURGY, DEPT_METHODS, DEPT_MOULDING,
    DEPT_QUALITY, DEPT_SAND_PLANT,
};
use foundry_core::error::CoreError;
use foundry_core::trial::{APPROVAL_PENDING, STAGE_REVIEW, STATUS_CLOSED, STATUS_CREATED};
use foundry_db::models::audit::CreateAuditLog;
use foundry_db::models::trial_card::CreateTrialCard;
use foundry_db::repositories::{AuditLogRepo, ProgressRepo, TrialCardRepo};

/// Insert a trial card plus its seed ledger row, committed.
async fn seed_trial(pool: &PgPool, trial_id: &str) {
    let input = CreateTrialCard {
        trial_id: trial_id.to_string(),
        part_name: "Impeller".to_string(),
        pattern_code: "PTN-104".to_string(),
        trial_type: "new development".to_string(),
        material_grade: "SG500/7".to_string(),
        initiated_by: "methods-eng".to_string(),
        date_of_sampling: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
        plan_moulds: 12,
        reason_for_sampling: "new tooling proving".to_string(),
        disa: Some("DISA-2".to_string()),
        sample_traceability: None,
        mould_correction: None,
        tooling_modification: None,
        remarks: None,
    };

    let mut tx = pool.begin().await.unwrap();
    TrialCardRepo::create(&mut tx, &input, DEPT_METHODS)
        .await
        .unwrap();
    engine::create_department_progress(&mut tx, trial_id)
        .await
        .unwrap();
    tx.commit().await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeding_creates_exactly_one_pending_methods_row(pool: PgPool) {
    seed_trial(&pool, "IMPELLER-01").await;

    assert_eq!(
        ProgressRepo::count_pending_for_trial(&pool, "IMPELLER-01")
            .await
            .unwrap(),
        1
    );

    let mut conn = pool.acquire().await.unwrap();
    let pending = ProgressRepo::find_pending_for_trial(&mut conn, "IMPELLER-01")
        .await
        .unwrap()
        .expect("seeded trial must have a pending row");
    assert_eq!(pending.department_id, DEPT_METHODS);
    assert_eq!(pending.approval_status, APPROVAL_PENDING);

    let trial = TrialCardRepo::find_by_trial_id(&pool, "IMPELLER-01")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trial.current_department_id, DEPT_METHODS);
    assert_eq!(trial.status, STATUS_CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pipeline_advances_in_fixed_order_and_closes(pool: PgPool) {
    seed_trial(&pool, "IMPELLER-02").await;

    let expected = [
        DEPT_SAND_PLANT,
        DEPT_MOULDING,
        DEPT_CORE_SHOP,
        DEPT_METALLURGY,
        DEPT_QUALITY,
        DEPT_MACHINE_SHOP,
    ];

    for next in expected {
        let mut tx = pool.begin().await.unwrap();
        let adv = engine::update_department(&mut tx, "IMPELLER-02", None)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        assert_matches!(adv, Advancement::Advanced { to, .. } if to == next);

        // Exactly one pending row, pointing at the new owner.
        assert_eq!(
            ProgressRepo::count_pending_for_trial(&pool, "IMPELLER-02")
                .await
                .unwrap(),
            1
        );
        let trial = TrialCardRepo::find_by_trial_id(&pool, "IMPELLER-02")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(trial.current_department_id, next);
    }

    // Terminal department signs off: the trial closes, no new ledger row.
    let mut tx = pool.begin().await.unwrap();
    let adv = engine::update_department(&mut tx, "IMPELLER-02", None)
        .await
        .unwrap();
    tx.commit().await.unwrap();
    assert_matches!(adv, Advancement::Closed { last } if last == DEPT_MACHINE_SHOP);

    assert_eq!(
        ProgressRepo::count_pending_for_trial(&pool, "IMPELLER-02")
            .await
            .unwrap(),
        0
    );
    let trial = TrialCardRepo::find_by_trial_id(&pool, "IMPELLER-02")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trial.status, STATUS_CLOSED);

    // A closed trial cannot advance further.
    let mut tx = pool.begin().await.unwrap();
    let err = engine::update_department(&mut tx, "IMPELLER-02", None)
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Conflict(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_role_flips_stage_without_moving_department(pool: PgPool) {
    seed_trial(&pool, "IMPELLER-03").await;

    let mut tx = pool.begin().await.unwrap();
    engine::update_role(&mut tx, "IMPELLER-03").await.unwrap();
    tx.commit().await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    let pending = ProgressRepo::find_pending_for_trial(&mut conn, "IMPELLER-03")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pending.stage, STAGE_REVIEW);
    assert_eq!(pending.department_id, DEPT_METHODS, "pointer must not move");

    let trial = TrialCardRepo::find_by_trial_id(&pool, "IMPELLER-03")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trial.current_department_id, DEPT_METHODS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_audit_insert_rolls_back_the_whole_transition(pool: PgPool) {
    seed_trial(&pool, "IMPELLER-04").await;

    let mut tx = pool.begin().await.unwrap();
    engine::update_department(&mut tx, "IMPELLER-04", None)
        .await
        .unwrap();

    // Simulate the audit write failing after the ledger moved: the
    // department FK is violated, poisoning the transaction.
    let audit_result = AuditLogRepo::insert(
        &mut tx,
        &CreateAuditLog {
            user_id: None,
            username: "qa-hod".to_string(),
            department_id: Some(999),
            trial_id: Some("IMPELLER-04".to_string()),
            action: "department_advanced".to_string(),
            remarks: None,
        },
    )
    .await;
    assert!(audit_result.is_err(), "audit insert must fail");
    drop(tx); // rollback

    // Nothing from the transition may have survived.
    let mut conn = pool.acquire().await.unwrap();
    let pending = ProgressRepo::find_pending_for_trial(&mut conn, "IMPELLER-04")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pending.department_id, DEPT_METHODS);

    let trial = TrialCardRepo::find_by_trial_id(&pool, "IMPELLER-04")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trial.current_department_id, DEPT_METHODS);
    assert_eq!(trial.status, STATUS_CREATED);

    let audit_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM audit_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(audit_count.0, 0, "no audit row may leak from the rollback");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_override_advances_like_a_review_approval(pool: PgPool) {
    seed_trial(&pool, "IMPELLER-05").await;

    let mut tx = pool.begin().await.unwrap();
    let adv = engine::approve_progress(&mut tx, "IMPELLER-05", Some("forced through"))
        .await
        .unwrap();
    tx.commit().await.unwrap();

    assert_matches!(
        adv,
        Advancement::Advanced { from, to } if from == DEPT_METHODS && to == DEPT_SAND_PLANT
    );

    // The approved Methods row keeps the override remark.
    let history = ProgressRepo::history_for_trial(&pool, "IMPELLER-05")
        .await
        .unwrap();
    let methods_row = history
        .iter()
        .find(|row| row.department_id == DEPT_METHODS)
        .unwrap();
    assert_eq!(methods_row.remarks.as_deref(), Some("forced through"));
    assert!(methods_row.completed_at.is_some());
}
