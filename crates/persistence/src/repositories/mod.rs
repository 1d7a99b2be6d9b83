//! Repository implementations for database operations.

pub mod role_permission;

pub use role_permission::{RolePermissionRepository, RolePermissionStore};
