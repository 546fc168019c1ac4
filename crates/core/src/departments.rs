//! Department id constants and the trial pipeline order.
//!
//! The ids must match the seed data in the `departments` migration. The
//! pipeline order is deliberately NOT the id order — Core Shop (6) hands
//! over to Metallurgy (5) — so every advancement decision must go through
//! [`next_department`] rather than comparing ids.

use crate::types::DbId;

pub const DEPT_ADMIN: DbId = 1;
pub const DEPT_METHODS: DbId = 2;
pub const DEPT_SAND_PLANT: DbId = 3;
pub const DEPT_MOULDING: DbId = 4;
pub const DEPT_METALLURGY: DbId = 5;
pub const DEPT_CORE_SHOP: DbId = 6;
pub const DEPT_QUALITY: DbId = 7;
pub const DEPT_MACHINE_SHOP: DbId = 8;

/// The fixed total order a trial moves through, first to last.
///
/// Every trial starts at Methods; the Machine Shop is terminal. Admin (1)
/// is not a pipeline department and never owns a trial.
pub const PIPELINE: &[DbId] = &[
    DEPT_METHODS,
    DEPT_SAND_PLANT,
    DEPT_MOULDING,
    DEPT_CORE_SHOP,
    DEPT_METALLURGY,
    DEPT_QUALITY,
    DEPT_MACHINE_SHOP,
];

/// The department every new trial is seeded with.
pub const FIRST_DEPARTMENT: DbId = DEPT_METHODS;

/// Look up the department that follows `current` in the pipeline.
///
/// Returns `None` when `current` is the terminal department (the trial
/// closes) or is not a pipeline department at all.
pub fn next_department(current: DbId) -> Option<DbId> {
    let idx = PIPELINE.iter().position(|&d| d == current)?;
    PIPELINE.get(idx + 1).copied()
}

/// Whether a department id participates in the trial pipeline.
pub fn is_pipeline_department(id: DbId) -> bool {
    PIPELINE.contains(&id)
}

/// Human-readable department name for logging and audit remarks.
///
/// Unknown ids render as `"department {id}"` rather than panicking — the
/// lookup is display-only.
pub fn department_name(id: DbId) -> String {
    match id {
        DEPT_ADMIN => "Admin".to_string(),
        DEPT_METHODS => "Methods".to_string(),
        DEPT_SAND_PLANT => "Sand Plant".to_string(),
        DEPT_MOULDING => "Moulding".to_string(),
        DEPT_METALLURGY => "Metallurgy".to_string(),
        DEPT_CORE_SHOP => "Core Shop".to_string(),
        DEPT_QUALITY => "Quality".to_string(),
        DEPT_MACHINE_SHOP => "Machine Shop".to_string(),
        other => format!("department {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_starts_at_methods() {
        assert_eq!(PIPELINE.first().copied(), Some(DEPT_METHODS));
        assert_eq!(FIRST_DEPARTMENT, DEPT_METHODS);
    }

    #[test]
    fn pipeline_order_is_fixed() {
        // The full order, pinned. Core Shop hands over to Metallurgy even
        // though its id is higher.
        assert_eq!(next_department(DEPT_METHODS), Some(DEPT_SAND_PLANT));
        assert_eq!(next_department(DEPT_SAND_PLANT), Some(DEPT_MOULDING));
        assert_eq!(next_department(DEPT_MOULDING), Some(DEPT_CORE_SHOP));
        assert_eq!(next_department(DEPT_CORE_SHOP), Some(DEPT_METALLURGY));
        assert_eq!(next_department(DEPT_METALLURGY), Some(DEPT_QUALITY));
        assert_eq!(next_department(DEPT_QUALITY), Some(DEPT_MACHINE_SHOP));
    }

    #[test]
    fn machine_shop_is_terminal() {
        assert_eq!(next_department(DEPT_MACHINE_SHOP), None);
    }

    #[test]
    fn advancement_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(next_department(DEPT_CORE_SHOP), Some(DEPT_METALLURGY));
        }
    }

    #[test]
    fn admin_is_not_a_pipeline_department() {
        assert!(!is_pipeline_department(DEPT_ADMIN));
        assert_eq!(next_department(DEPT_ADMIN), None);
    }

    #[test]
    fn every_pipeline_department_is_recognized() {
        for &d in PIPELINE {
            assert!(is_pipeline_department(d));
        }
    }

    #[test]
    fn unknown_department_name_does_not_panic() {
        assert_eq!(department_name(99), "department 99");
    }
}
