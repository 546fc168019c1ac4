//! Trial card and progress ledger status constants plus trial-id validation.

/// Trial has been created by Methods but no department has acted yet.
pub const STATUS_CREATED: &str = "CREATED";

/// At least one department transition has fired.
pub const STATUS_IN_PROGRESS: &str = "IN_PROGRESS";

/// The terminal department approved its work; no further ledger rows.
pub const STATUS_CLOSED: &str = "CLOSED";

/// All valid trial statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_CREATED, STATUS_IN_PROGRESS, STATUS_CLOSED];

/// Ledger row is waiting on the owning department.
pub const APPROVAL_PENDING: &str = "pending";

/// Ledger row was approved by the department (or by admin override).
///
/// This is the canonical value; the `'completed'` synonym that appeared in
/// some legacy read paths maps to it, with `completed_at` carrying the
/// completion moment.
pub const APPROVAL_APPROVED: &str = "approved";

/// Intra-department sub-state: a plain user is still entering data.
pub const STAGE_ENTRY: &str = "entry";

/// Intra-department sub-state: work was handed off to the department HOD.
pub const STAGE_REVIEW: &str = "review";

/// Validate a user-supplied trial id.
///
/// The convention is `{part_name}-{sequence}`: a non-empty part name, a
/// final dash, and a trailing decimal sequence number. The part name itself
/// may contain dashes (`BRACKET-HSG-07`).
pub fn validate_trial_id(trial_id: &str) -> Result<(), String> {
    let trimmed = trial_id.trim();
    if trimmed.is_empty() {
        return Err("trial_id must not be empty".to_string());
    }
    if trimmed.len() > 64 {
        return Err("trial_id must be at most 64 characters".to_string());
    }
    let Some((part, seq)) = trimmed.rsplit_once('-') else {
        return Err(format!(
            "trial_id '{trimmed}' must follow the {{part_name}}-{{sequence}} convention"
        ));
    };
    if part.trim().is_empty() {
        return Err(format!("trial_id '{trimmed}' is missing a part name"));
    }
    if seq.is_empty() || !seq.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!(
            "trial_id '{trimmed}' must end in a numeric sequence"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_trial_id_accepted() {
        assert!(validate_trial_id("IMPELLER-01").is_ok());
    }

    #[test]
    fn dashed_part_name_accepted() {
        assert!(validate_trial_id("BRACKET-HSG-07").is_ok());
    }

    #[test]
    fn missing_sequence_rejected() {
        assert!(validate_trial_id("IMPELLER").is_err());
        assert!(validate_trial_id("IMPELLER-").is_err());
    }

    #[test]
    fn non_numeric_sequence_rejected() {
        assert!(validate_trial_id("IMPELLER-A1").is_err());
    }

    #[test]
    fn empty_and_whitespace_rejected() {
        assert!(validate_trial_id("").is_err());
        assert!(validate_trial_id("   ").is_err());
        assert!(validate_trial_id("-01").is_err());
    }

    #[test]
    fn overlong_id_rejected() {
        let long = format!("{}-01", "X".repeat(70));
        assert!(validate_trial_id(&long).is_err());
    }
}
