//! Role permission database entity and its model mapper.

use chrono::{DateTime, Utc};
use domain::models::RolePermission;
use sqlx::FromRow;

/// Role permission entity, a direct mapping to a `role_permissions` row.
///
/// `id` and the timestamps are absent on entities that have not been
/// persisted yet; the database assigns them on insert.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RolePermissionEntity {
    pub id: Option<i64>,
    pub role_id: i64,
    pub permission_id: String,
    pub value_yn: bool,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Converts an entity into the transfer shape, copying fields verbatim.
///
/// Absent input yields absent output.
pub fn model_from_entity(entity: Option<RolePermissionEntity>) -> Option<RolePermission> {
    entity.map(|entity| RolePermission {
        id: entity.id,
        role_id: entity.role_id,
        permission_id: entity.permission_id,
        value_yn: entity.value_yn,
        created_by: entity.created_by,
        updated_by: entity.updated_by,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    })
}

/// Converts a transfer object into a fresh entity.
///
/// Absent input yields absent output. The id is carried over only when it is
/// set and nonzero; an id of 0 is treated as unset. Timestamps are left
/// empty, the storage layer owns them.
pub fn entity_from_model(model: Option<&RolePermission>) -> Option<RolePermissionEntity> {
    model.map(|model| RolePermissionEntity {
        id: model.id.filter(|id| *id != 0),
        role_id: model.role_id,
        permission_id: model.permission_id.clone(),
        value_yn: model.value_yn,
        created_by: model.created_by.clone(),
        updated_by: model.updated_by.clone(),
        created_at: None,
        updated_at: None,
    })
}
