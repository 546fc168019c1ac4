//! Audit trail action-name constants.
//!
//! The audit log is an append-only compliance trail: every state-changing
//! handler inserts exactly one entry inside its transaction. Nothing ever
//! reads the log back for logic.

pub mod actions {
    pub const TRIAL_CREATED: &str = "trial_created";
    pub const TRIAL_DELETED: &str = "trial_deleted";
    pub const INSPECTION_SUBMITTED: &str = "inspection_submitted";
    pub const INSPECTION_UPDATED: &str = "inspection_updated";
    pub const ROLE_ADVANCED: &str = "role_advanced";
    pub const DEPARTMENT_ADVANCED: &str = "department_advanced";
    pub const DEPARTMENT_APPROVED: &str = "department_approved";
    pub const TRIAL_CLOSED: &str = "trial_closed";
    pub const ADMIN_OVERRIDE: &str = "admin_override";
    pub const MASTER_CARD_CREATED: &str = "master_card_created";
    pub const MASTER_CARD_UPDATED: &str = "master_card_updated";
    pub const USER_CREATED: &str = "user_created";
    pub const PASSWORD_RESET: &str = "password_reset";
}
