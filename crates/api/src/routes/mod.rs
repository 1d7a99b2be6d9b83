//! HTTP route handlers.

pub mod health;
pub mod role_permissions;
