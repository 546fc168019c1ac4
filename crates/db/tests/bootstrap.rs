use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema and seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    foundry_db::health_check(&pool).await.unwrap();

    // Departments are seeded by migration and load-bearing for the pipeline.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM departments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 8, "expected 8 seeded departments");

    let methods: (String,) = sqlx::query_as("SELECT name FROM departments WHERE id = 2")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(methods.0, "Methods");

    // Workflow tables exist and start empty.
    for table in [
        "users",
        "trial_cards",
        "department_progress",
        "audit_logs",
        "sand_properties",
        "mould_corrections",
        "metallurgical_inspections",
        "visual_inspections",
        "dimensional_inspections",
        "machine_shop_records",
        "material_corrections",
        "master_cards",
        "password_reset_otps",
    ] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The partial unique index must reject a second pending row per trial.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_single_pending_row_enforced(pool: PgPool) {
    sqlx::query(
        "INSERT INTO trial_cards
            (trial_id, part_name, pattern_code, trial_type, material_grade,
             initiated_by, date_of_sampling, plan_moulds, reason_for_sampling,
             current_department_id)
         VALUES ('HUB-01', 'Hub', 'PTN-9', 'new', 'SG500/7', 'methods-eng',
                 '2026-03-01', 10, 'new tooling', 2)",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO department_progress (trial_id, department_id) VALUES ('HUB-01', 2)")
        .execute(&pool)
        .await
        .unwrap();

    let second =
        sqlx::query("INSERT INTO department_progress (trial_id, department_id) VALUES ('HUB-01', 3)")
            .execute(&pool)
            .await;

    assert!(
        second.is_err(),
        "second pending row for the same trial must violate uq_department_progress_pending"
    );
}
