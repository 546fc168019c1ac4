//! Role-based transition dispatch for inspection submissions.
//!
//! Every inspection controller ends with the same decision: given who
//! submitted and whether the submission was a draft, which progress
//! operation (if any) fires. Centralizing the table here keeps the seven
//! controllers from re-deriving it with their own conditionals.

use crate::roles::{ROLE_ADMIN, ROLE_USER};

/// Whether the submission created a new record or edited an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Create,
    Update,
}

/// The progress operation an inspection submission triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    /// No automatic transition. Admins only act through the explicit
    /// approval endpoint.
    None,
    /// Advance the intra-department stage (user hand-off to HOD); the
    /// department pointer is untouched.
    UpdateRole,
    /// Approve the current department and move the trial forward.
    UpdateDepartment,
    /// Draft/save-and-forward: same end state as `UpdateDepartment`, but
    /// triggered from the submission itself rather than a review action.
    TriggerNextDepartment,
}

/// Decide which progress operation an inspection submission fires.
///
/// - Admins never trigger an automatic transition.
/// - A draft submission forwards the trial directly, whoever submitted it.
/// - Otherwise a plain user hands off within the department; on edits, any
///   non-user reviewer (HOD) approves and advances the department.
pub fn dispatch(kind: SubmissionKind, role: &str, is_draft: bool) -> TransitionAction {
    if role == ROLE_ADMIN {
        return TransitionAction::None;
    }
    if is_draft {
        return TransitionAction::TriggerNextDepartment;
    }
    match kind {
        SubmissionKind::Create => TransitionAction::UpdateRole,
        SubmissionKind::Update => {
            if role == ROLE_USER {
                TransitionAction::UpdateRole
            } else {
                TransitionAction::UpdateDepartment
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::ROLE_HOD;

    #[test]
    fn user_create_without_draft_advances_role_only() {
        assert_eq!(
            dispatch(SubmissionKind::Create, ROLE_USER, false),
            TransitionAction::UpdateRole
        );
    }

    #[test]
    fn user_update_without_draft_advances_role_only() {
        assert_eq!(
            dispatch(SubmissionKind::Update, ROLE_USER, false),
            TransitionAction::UpdateRole
        );
    }

    #[test]
    fn hod_update_advances_department() {
        assert_eq!(
            dispatch(SubmissionKind::Update, ROLE_HOD, false),
            TransitionAction::UpdateDepartment
        );
    }

    #[test]
    fn hod_create_without_draft_advances_role_only() {
        // On first submission even a reviewer only hands off; department
        // advancement happens on the review pass.
        assert_eq!(
            dispatch(SubmissionKind::Create, ROLE_HOD, false),
            TransitionAction::UpdateRole
        );
    }

    #[test]
    fn draft_forwards_regardless_of_kind_or_role() {
        assert_eq!(
            dispatch(SubmissionKind::Create, ROLE_USER, true),
            TransitionAction::TriggerNextDepartment
        );
        assert_eq!(
            dispatch(SubmissionKind::Update, ROLE_HOD, true),
            TransitionAction::TriggerNextDepartment
        );
    }

    #[test]
    fn admin_never_auto_transitions() {
        assert_eq!(
            dispatch(SubmissionKind::Create, ROLE_ADMIN, false),
            TransitionAction::None
        );
        assert_eq!(
            dispatch(SubmissionKind::Update, ROLE_ADMIN, true),
            TransitionAction::None
        );
    }
}
