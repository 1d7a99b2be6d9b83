//! Domain models for the Leave Manager backend.

pub mod role_permission;

pub use role_permission::{
    ListRolePermissionsQuery, RolePermission, RolePermissionFilter, UpsertRolePermissionRequest,
};
