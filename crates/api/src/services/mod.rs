//! Application services.

pub mod role_permission;

pub use role_permission::RolePermissionService;
