//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `user_roles.role`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_USER: &str = "user";

/// All assignable roles.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MODERATOR, ROLE_USER];

/// Effective role for an account with no `user_roles` row.
pub const DEFAULT_ROLE: &str = ROLE_USER;

/// Whether a role string is one of the known roles.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

/// Whether the role may moderate guest submissions (list, export, delete).
pub fn can_moderate(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_MODERATOR
}
