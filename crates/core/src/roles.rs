//! Well-known role name constants.
//!
//! These must match the seed data in the `users` migration. Department HODs
//! review and forward work; plain users enter inspection data; admins hold
//! the administrative override.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
pub const ROLE_HOD: &str = "hod";

/// All roles the platform recognizes.
pub const KNOWN_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER, ROLE_HOD];

/// Validate that a role string is one of the accepted values.
pub fn is_known_role(role: &str) -> bool {
    KNOWN_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_accepted() {
        assert!(is_known_role(ROLE_ADMIN));
        assert!(is_known_role(ROLE_USER));
        assert!(is_known_role(ROLE_HOD));
    }

    #[test]
    fn unknown_role_rejected() {
        assert!(!is_known_role("superuser"));
        assert!(!is_known_role(""));
        assert!(!is_known_role("Admin"));
    }
}
