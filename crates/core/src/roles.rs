//! Well-known role name constants.
//!
//! These must match the seed data in the `roles` migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";
