//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod role_permission;

pub use role_permission::{entity_from_model, model_from_entity, RolePermissionEntity};
